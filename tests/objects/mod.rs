mod cat_file_distinguishes_missing_from_corrupt;
