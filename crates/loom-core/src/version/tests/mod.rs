mod tests_build_run;
