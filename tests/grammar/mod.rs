mod tests_foundation_grammar;
