mod test_parse;
