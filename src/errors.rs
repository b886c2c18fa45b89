/*
 *
 *  *
 *  *      Copyright (c) 2018-2025, SnackCloud All rights reserved.
 *  *
 *  *   Redistribution and use in source and binary forms, with or without
 *  *   modification, are permitted provided that the following conditions are met:
 *  *
 *  *   Redistributions of source code must retain the above copyright notice,
 *  *   this list of conditions and the following disclaimer.
 *  *   Redistributions in binary form must reproduce the above copyright
 *  *   notice, this list of conditions and the following disclaimer in the
 *  *   documentation and/or other materials provided with the distribution.
 *  *   Neither the name of the www.snackcloud.cn developer nor the names of its
 *  *   contributors may be used to endorse or promote products derived from
 *  *   this software without specific prior written permission.
 *  *   Author: SnackCloud
 *  *
 *  
 */
//! 
//! Common Errors.
//! 
use std::error::Error;
use std::fmt;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggerError {
    /// The query matched no rows. Database layers return this (or wrap it as a
    /// `source()`) so that `ignore_record_not_found_error` can recognise it.
    RecordNotFound,
    InvalidLevel(String),
    InvalidConfig(String),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LoggerError::RecordNotFound => write!(f, "record not found"),
            LoggerError::InvalidLevel(ref level) => write!(f, "invalid log level: {}", level),
            LoggerError::InvalidConfig(ref err) => write!(f, "invalid logger config: {}", err),
        }
    }
}

impl Error for LoggerError {}

impl From<serde_json::Error> for LoggerError {
    fn from(err: serde_json::Error) -> Self {
        LoggerError::InvalidConfig(err.to_string())
    }
}

/// Whether `err`, or any error in its `source()` chain, is [`LoggerError::RecordNotFound`].
pub fn is_record_not_found(err: &(dyn Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(err) = current {
        if let Some(LoggerError::RecordNotFound) = err.downcast_ref::<LoggerError>() {
            return true;
        }
        current = err.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct QueryFailed(LoggerError);

    impl fmt::Display for QueryFailed {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "query failed")
        }
    }

    impl Error for QueryFailed {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn record_not_found_display() {
        assert_eq!(LoggerError::RecordNotFound.to_string(), "record not found");
    }

    #[test]
    fn detects_wrapped_record_not_found() {
        assert!(is_record_not_found(&LoggerError::RecordNotFound));
        assert!(is_record_not_found(&QueryFailed(LoggerError::RecordNotFound)));
        assert!(!is_record_not_found(&QueryFailed(LoggerError::InvalidConfig("x".into()))));
    }

    #[test]
    fn same_text_is_not_the_sentinel() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "record not found");
        assert!(!is_record_not_found(&err));
    }
}
