//! Tests for the OMNI2 parser module
