// ABOUTME: Role resolution command for worship-cli
// ABOUTME: Loads the snapshot into the in-memory store and prints effective roles and permissions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use std::sync::Arc;

use tracing::info;
use worship_planner::{
    errors::AppResult,
    models::{TenantId, UserId},
    permissions::{Permissions, RoleResolver},
    store::{MemoryStore, Snapshot},
};

use crate::helpers::display::join_or_none;

/// Print the effective roles of `user` in `tenant`
pub async fn roles(snapshot: &Snapshot, user: &str, tenant: &str) -> AppResult<()> {
    let resolver = RoleResolver::from_store(Arc::new(MemoryStore::from_snapshot(snapshot)));
    let user_id = UserId::new(user);
    let tenant_id = TenantId::new(tenant);

    let roles = resolver.resolve_roles(&user_id, &tenant_id).await?;
    let system_roles = resolver.resolve_system_roles(&user_id).await?;
    let permissions = Permissions::from_roles(&roles);
    info!(user = %user_id, tenant = %tenant_id, roles = roles.len(), "Resolved roles");

    println!("User:         {user_id}");
    println!("Church:       {tenant_id}");
    println!("Roles:        {}", join_or_none(&roles));
    println!("System roles: {}", join_or_none(&system_roles));
    if permissions.is_empty() {
        println!("Permissions:  (none)");
    } else {
        println!("Permissions:  {}", permissions.describe());
    }
    println!(
        "Can edit plans: {}, can manage music: {}",
        permissions.can_edit_plan(),
        permissions.can_manage_music()
    );
    Ok(())
}
