//! Tests for the flight-rules classifier
