mod add_files_from_nested_directories;
mod restaging_an_unmodified_file_stages_nothing;
