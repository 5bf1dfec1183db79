mod commit_with_identity_from_config;
mod commit_without_identity_fails;
mod config_rejects_identity_with_line_breaks;
mod files_modified_after_staging_remain_staged;
mod write_commit_object_for_nested_project;
