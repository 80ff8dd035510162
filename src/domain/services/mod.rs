pub mod conversation_filter;
