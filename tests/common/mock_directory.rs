//! Scripted in-memory implementation of the identity directory.
//!
//! Collections, identities and failure injections are set up per test; every
//! trait call is appended to a history log so tests can assert on what was
//! touched and in which order.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use tfsadmin::domain::entities::{CollectionRef, Identity, IdentityDescriptor};
use tfsadmin::infrastructure::tfs::{
    CollectionService, DirectoryError, IdentityDirectory, MembershipQuery,
};

/// Scripted directory standing in for the remote server.
pub struct MockDirectory {
    authenticated: Identity,
    collections: Vec<CollectionRef>,
    by_name: HashMap<(Uuid, String), Identity>,
    by_descriptor: HashMap<(Uuid, IdentityDescriptor), Identity>,
    missing_services: Vec<(Uuid, CollectionService)>,
    failing_removals: HashMap<(Uuid, IdentityDescriptor), String>,
    call_history: Arc<Mutex<Vec<String>>>,
}

impl MockDirectory {
    /// Create an empty directory authenticated as a fixed admin identity.
    pub fn new() -> Self {
        Self {
            authenticated: Identity::new(
                "Admin User",
                "DOMAIN\\admin",
                IdentityDescriptor::new("System.Security.Principal", "S-admin"),
            ),
            collections: Vec::new(),
            by_name: HashMap::new(),
            by_descriptor: HashMap::new(),
            missing_services: Vec::new(),
            failing_removals: HashMap::new(),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register a collection and return its reference.
    pub fn add_collection(&mut self, name: &str) -> CollectionRef {
        let collection = CollectionRef::new(Uuid::new_v4(), name);
        self.collections.push(collection.clone());
        collection
    }

    /// Register an identity, addressable by account name and by descriptor
    /// within the given collection.
    pub fn put_identity(
        &mut self,
        collection: &CollectionRef,
        account_name: &str,
        identity: Identity,
    ) {
        self.by_name.insert(
            (collection.id, account_name.to_string()),
            identity.clone(),
        );
        self.by_descriptor
            .insert((collection.id, identity.descriptor.clone()), identity);
    }

    /// Mark a per-collection service as missing.
    pub fn remove_service(&mut self, collection: &CollectionRef, service: CollectionService) {
        self.missing_services.push((collection.id, service));
    }

    /// Make removals from the given group fail with `message`.
    pub fn fail_removal_from(
        &mut self,
        collection: &CollectionRef,
        group: &IdentityDescriptor,
        message: &str,
    ) {
        self.failing_removals
            .insert((collection.id, group.clone()), message.to_string());
    }

    /// Snapshot of the call history.
    pub fn calls(&self) -> Vec<String> {
        self.call_history.lock().unwrap().clone()
    }

    /// Calls whose log line starts with `prefix`.
    pub fn calls_matching(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| call.starts_with(prefix))
            .collect()
    }

    fn log(&self, call: String) {
        self.call_history.lock().unwrap().push(call);
    }
}

impl Default for MockDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityDirectory for MockDirectory {
    async fn authenticated_identity(&self) -> Result<Identity, DirectoryError> {
        self.log("connect".to_string());
        Ok(self.authenticated.clone())
    }

    async fn collections(&self) -> Result<Vec<CollectionRef>, DirectoryError> {
        self.log("collections".to_string());
        Ok(self.collections.clone())
    }

    async fn has_service(
        &self,
        collection: &CollectionRef,
        service: CollectionService,
    ) -> Result<bool, DirectoryError> {
        self.log(format!(
            "has_service:{}:{}",
            collection.name,
            service.as_str()
        ));
        Ok(!self
            .missing_services
            .iter()
            .any(|(id, s)| *id == collection.id && *s == service))
    }

    async fn read_identity_by_name(
        &self,
        collection: &CollectionRef,
        account_name: &str,
        query: MembershipQuery,
    ) -> Result<Option<Identity>, DirectoryError> {
        self.log(format!(
            "read_by_name:{}:{}:{}",
            collection.name,
            account_name,
            query.as_str()
        ));
        Ok(self
            .by_name
            .get(&(collection.id, account_name.to_string()))
            .cloned())
    }

    async fn read_identity_by_descriptor(
        &self,
        collection: &CollectionRef,
        descriptor: &IdentityDescriptor,
        query: MembershipQuery,
    ) -> Result<Option<Identity>, DirectoryError> {
        self.log(format!(
            "read_by_descriptor:{}:{}:{}",
            collection.name,
            descriptor,
            query.as_str()
        ));
        Ok(self
            .by_descriptor
            .get(&(collection.id, descriptor.clone()))
            .cloned())
    }

    async fn remove_member_from_group(
        &self,
        collection: &CollectionRef,
        group: &IdentityDescriptor,
        member: &IdentityDescriptor,
    ) -> Result<(), DirectoryError> {
        self.log(format!("remove:{}:{}:{}", collection.name, group, member));
        if let Some(message) = self.failing_removals.get(&(collection.id, group.clone())) {
            return Err(DirectoryError::Rejected {
                message: message.clone(),
            });
        }
        Ok(())
    }
}
