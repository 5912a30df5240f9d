mod data_url;
