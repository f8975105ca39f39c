//! Edge case tests for uitc-lex
