/*! Integration tests for nestkit.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - access: Tests for path-based get/set/remove and key existence
 * - merge: Tests for the deep merge and its sentinel overrides
 * - index: Tests for indexing, grouping, column extraction and mapping
 * - sort: Tests for the multi-key sorter and the recursive canonicalizer
 * - filter: Tests for selective projection by dotted paths
 * - shape: Tests for shape predicates and membership
 * - encode: Tests for the entity-codec leaf transforms
 * - reflect: Tests for foreign-object reflection into containers
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("nestkit=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod access;
mod encode;
mod merge;
mod reflect;
mod sort;
