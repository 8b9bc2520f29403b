mod helpers;
mod test_http_surface;
