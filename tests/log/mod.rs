mod show_log_from_specific_commit_sha;
mod show_log_with_max_count;
mod show_multiple_commits_in_oneline_format;
