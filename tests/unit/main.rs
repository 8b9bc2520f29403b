mod test_thread_detail;
mod test_toggle_comment_like;
