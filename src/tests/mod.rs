mod test_http_client;
