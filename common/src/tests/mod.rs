mod test_region;
