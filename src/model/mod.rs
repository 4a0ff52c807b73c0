/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Token endpoint response model
pub mod auth;
/// HTTP request execution with status classification and retry
pub mod http;
/// Retry strategy for HTTP requests
pub mod retry;
