//! Workspace-level integration tests for FibBench live under `tests/`.
