//! Type checker tests
