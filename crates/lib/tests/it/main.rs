/*! Integration tests for replgraph.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure follows the engine's concerns:
 * - identity: Content-derived node identities across independent replicas
 * - replica: Local mutators and the state they leave behind
 * - conflicts: Add/remove races and their tie-break policy
 * - convergence: Commutativity, idempotence and delivery-order independence
 * - scenarios: End-to-end multi-replica stories
 * - traversal: Depth-first, breadth-first and shortest-route queries
 * - persistence: Snapshot files
 * - concurrency: Replicas shared across threads behind a lock
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("replgraph=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod convergence;
mod identity;
mod persistence;
mod traversal;
