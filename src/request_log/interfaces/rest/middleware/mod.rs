pub mod request_instrumentation_middleware;
