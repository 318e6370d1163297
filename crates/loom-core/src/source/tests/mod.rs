mod tests_source_set;
mod tests_unit;
