/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Ordered header set
pub mod headers;
/// Envelope, body, attachment and transport outcome types
pub mod http;
