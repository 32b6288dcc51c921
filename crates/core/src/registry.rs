//! Descriptor registry
//!
//! Maps each supported [`ServerVersion`] to the constructor of its descriptor.

use crate::context::LaunchContext;
use crate::descriptor::{
    LaunchDescriptor, Tomcat6Descriptor, Tomcat7Descriptor, Tomcat8Descriptor, Tomcat9Descriptor,
};
use crate::error::{Error, Result};
use crate::version::ServerVersion;
use std::collections::HashMap;
use tracing::debug;

/// Builds a descriptor bound to the given context
pub type DescriptorFactory = fn(LaunchContext) -> Box<dyn LaunchDescriptor>;

/// Registry of descriptor families keyed by version
#[derive(Clone)]
pub struct DescriptorRegistry {
    factories: HashMap<ServerVersion, DescriptorFactory>,
}

impl std::fmt::Debug for DescriptorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescriptorRegistry")
            .field("versions", &self.supported_versions())
            .finish()
    }
}

impl DescriptorRegistry {
    /// Create a registry with every built-in version
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register(ServerVersion::Tomcat6, |ctx| Box::new(Tomcat6Descriptor::new(ctx)));
        registry.register(ServerVersion::Tomcat7, |ctx| Box::new(Tomcat7Descriptor::new(ctx)));
        registry.register(ServerVersion::Tomcat8, |ctx| Box::new(Tomcat8Descriptor::new(ctx)));
        registry.register(ServerVersion::Tomcat9, |ctx| Box::new(Tomcat9Descriptor::new(ctx)));

        registry
    }

    /// A registry with nothing registered
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register (or replace) the descriptor family for a version
    pub fn register(&mut self, version: ServerVersion, factory: DescriptorFactory) {
        self.factories.insert(version, factory);
    }

    pub fn contains(&self, version: ServerVersion) -> bool {
        self.factories.contains_key(&version)
    }

    /// Registered versions, oldest first
    pub fn supported_versions(&self) -> Vec<ServerVersion> {
        let mut versions: Vec<_> = self.factories.keys().copied().collect();
        versions.sort();
        versions
    }

    /// Build the descriptor for a version tag such as `6.x` or `7.0.109`
    pub fn for_version(&self, tag: &str, context: LaunchContext) -> Result<Box<dyn LaunchDescriptor>> {
        let version = ServerVersion::parse_tag(tag)?;
        self.for_server_version(version, context)
            .map_err(|_| Error::UnsupportedVersion(tag.to_string()))
    }

    pub fn for_server_version(
        &self,
        version: ServerVersion,
        context: LaunchContext,
    ) -> Result<Box<dyn LaunchDescriptor>> {
        let factory = self
            .factories
            .get(&version)
            .ok_or_else(|| Error::UnsupportedVersion(version.tag()))?;

        debug!("Using {} descriptor for {:?}", version, context.installation());
        Ok(factory(context))
    }
}

impl Default for DescriptorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
