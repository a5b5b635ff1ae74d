mod test_numbers;
