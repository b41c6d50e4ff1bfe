//! Graph worker thread.
//!
//! The query engine lives on one dedicated thread. Requests arrive over
//! `mpsc` and are answered over `oneshot`, one at a time. Startup (fetch
//! and load) runs on the same thread before the first request is served,
//! so it never interleaves with queries.

use primekg::prelude::*;
use std::sync::mpsc;
use tokio::sync::oneshot;
use tracing::{debug, info};

/// Commands sent to the graph worker thread.
pub enum GraphCommand {
    Execute {
        op: Operation,
        tx: oneshot::Sender<String>,
    },
    Read {
        resource: Resource,
        tx: oneshot::Sender<String>,
    },
}

/// Handle to the graph worker thread.
#[derive(Clone)]
pub struct GraphHandle {
    cmd_tx: mpsc::Sender<GraphCommand>,
}

impl GraphHandle {
    /// Spawn the worker; it refreshes and loads according to `config`.
    pub fn spawn(config: KgConfig) -> Self {
        Self::spawn_with(move || open_engine(&config))
    }

    /// Spawn the worker with a custom engine constructor.
    pub fn spawn_with<F>(open: F) -> Self
    where
        F: FnOnce() -> QueryEngine + Send + 'static,
    {
        let (cmd_tx, cmd_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let engine = open();
            info!(
                "Graph worker ready ({})",
                if engine.is_loaded() { "loaded" } else { "no data" }
            );

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    GraphCommand::Execute { op, tx } => {
                        debug!("Executing {}", op.name());
                        let _ = tx.send(engine.execute(&op));
                    }
                    GraphCommand::Read { resource, tx } => {
                        debug!("Reading {}", resource.uri());
                        let _ = tx.send(engine.read(resource));
                    }
                }
            }
        });

        Self { cmd_tx }
    }

    /// Run a lookup operation.
    pub async fn execute(&self, op: Operation) -> anyhow::Result<String> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(GraphCommand::Execute { op, tx })
            .map_err(|_| anyhow::anyhow!("Graph worker thread has shut down"))?;
        rx.await
            .map_err(|_| anyhow::anyhow!("Graph worker dropped response"))
    }

    /// Read a resource document.
    pub async fn read(&self, resource: Resource) -> anyhow::Result<String> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(GraphCommand::Read { resource, tx })
            .map_err(|_| anyhow::anyhow!("Graph worker thread has shut down"))?;
        rx.await
            .map_err(|_| anyhow::anyhow!("Graph worker dropped response"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_engine() -> QueryEngine {
        let csv = "x_id,x_type,x_name,relation,y_id,y_type,y_name\n\
                   DB1,drug,Aspirin,targets,PTGS1,protein,PTGS1\n";
        QueryEngine::loaded(loader::from_reader(csv.as_bytes()).unwrap())
    }

    #[tokio::test]
    async fn executes_operations_on_worker() {
        let handle = GraphHandle::spawn_with(sample_engine);
        let op = Operation::FindDrugTargets(DrugTargetsRequest {
            drug_name: "aspirin".into(),
        });
        let out = handle.execute(op).await.unwrap();
        assert!(out.starts_with("Found 1 targets for aspirin:"));
    }

    #[tokio::test]
    async fn reads_resources_on_worker() {
        let handle = GraphHandle::spawn_with(QueryEngine::unloaded);
        assert!(handle.read(Resource::Schema).await.unwrap().starts_with("PrimeKG Schema"));
        assert_eq!(handle.read(Resource::Statistics).await.unwrap(), NOT_LOADED);
    }

    #[tokio::test]
    async fn clones_share_one_worker() {
        let handle = GraphHandle::spawn_with(sample_engine);
        let other = handle.clone();
        let a = handle
            .execute(Operation::GetNodeDetails(NodeDetailsRequest { node_id: "DB1".into() }))
            .await
            .unwrap();
        let b = other
            .execute(Operation::GetNodeDetails(NodeDetailsRequest { node_id: "DB1".into() }))
            .await
            .unwrap();
        assert_eq!(a, b);
    }
}
