mod ensure_ready_tests;
