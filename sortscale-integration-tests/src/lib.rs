// Intentionally empty. This crate only carries the workspace integration tests.
