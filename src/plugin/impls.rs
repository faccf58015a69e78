pub mod ssl_plugin;
