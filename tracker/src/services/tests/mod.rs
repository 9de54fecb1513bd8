//! Tests for tracker services
