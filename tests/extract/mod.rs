mod tests_builtin_table;
