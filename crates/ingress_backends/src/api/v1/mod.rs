pub mod backendconfig;
