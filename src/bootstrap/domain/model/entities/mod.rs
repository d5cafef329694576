pub mod bootstrap_run;
