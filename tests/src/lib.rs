//! Integration tests for the gatecheck workspace live under `tests/`.
