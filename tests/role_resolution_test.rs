// ABOUTME: Integration tests for effective role resolution across churches
// ABOUTME: Covers global/tenant union, missing records, duplicate memberships, and permission mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use worship_planner::errors::ErrorCode;
use worship_planner::models::{ChurchMember, Role, RoleSet, SystemRole, TenantId, User, UserId};
use worship_planner::permissions::{Permissions, RoleResolver};
use worship_planner::store::MemoryStore;

fn ids(user: &str, tenant: &str) -> (UserId, TenantId) {
    (UserId::new(user), TenantId::new(tenant))
}

#[tokio::test]
async fn test_union_of_global_and_tenant_roles_is_deduplicated() {
    let resolver = common::sample_resolver();
    let (user, tenant) = ids("u-ana", "grace");

    let roles = resolver.resolve_roles(&user, &tenant).await.unwrap();

    let expected: RoleSet = [Role::MusicManager, Role::MusicMember].into();
    assert_eq!(roles, expected);
}

#[tokio::test]
async fn test_tenant_roles_do_not_leak_across_churches() {
    let resolver = common::sample_resolver();
    let (user, hope) = ids("u-ana", "hope");

    let roles = resolver.resolve_roles(&user, &hope).await.unwrap();
    assert_eq!(roles, [Role::Finance, Role::MusicMember].into());

    let (_, elsewhere) = ids("u-ana", "elsewhere");
    let roles = resolver.resolve_roles(&user, &elsewhere).await.unwrap();
    assert_eq!(roles, [Role::MusicMember].into());
}

#[tokio::test]
async fn test_global_roles_apply_without_tenant_roles() {
    let resolver = common::sample_resolver();
    let (user, tenant) = ids("u-admin", "grace");

    let roles = resolver.resolve_roles(&user, &tenant).await.unwrap();
    assert_eq!(roles, [Role::Admin].into());
    assert!(resolver
        .resolve_permissions(&user, &tenant)
        .await
        .unwrap()
        .is_all());
}

#[tokio::test]
async fn test_membership_without_roles_attribute_contributes_nothing() {
    let resolver = common::sample_resolver();
    let (user, tenant) = ids("u-ben", "grace");

    let roles = resolver.resolve_roles(&user, &tenant).await.unwrap();
    assert!(roles.is_empty());
    let permissions = resolver.resolve_permissions(&user, &tenant).await.unwrap();
    assert!(permissions.is_empty());
}

#[tokio::test]
async fn test_missing_user_and_membership_yield_empty_set() {
    let resolver = common::sample_resolver();
    let (user, tenant) = ids("nobody", "grace");

    assert!(resolver.resolve_roles(&user, &tenant).await.unwrap().is_empty());
    assert!(resolver.resolve_system_roles(&user).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_system_roles_come_from_user_record() {
    let resolver = common::sample_resolver();
    let roles = resolver
        .resolve_system_roles(&UserId::new("u-ben"))
        .await
        .unwrap();
    assert_eq!(roles.into_iter().collect::<Vec<_>>(), [SystemRole::Support]);
}

#[tokio::test]
async fn test_first_membership_wins_when_duplicated() {
    let store = MemoryStore::new();
    store.insert_user(User::new("u1", "Dee"));
    store.insert_member(ChurchMember::new("u1", "grace", [Role::EventManager]));
    store.insert_member(ChurchMember::new("u1", "grace", [Role::Finance]));
    let resolver = RoleResolver::from_store(Arc::new(store));

    let roles = resolver
        .resolve_roles(&UserId::new("u1"), &TenantId::new("grace"))
        .await
        .unwrap();
    assert_eq!(roles, [Role::EventManager].into());
}

#[tokio::test]
async fn test_store_replacement_is_seen_by_next_resolution() {
    let store = Arc::new(MemoryStore::new());
    let resolver = RoleResolver::from_store(store.clone());
    let (user, tenant) = ids("u-ana", "grace");
    assert!(resolver.resolve_roles(&user, &tenant).await.unwrap().is_empty());

    store.replace(&common::sample_snapshot());
    assert!(!resolver.resolve_roles(&user, &tenant).await.unwrap().is_empty());
}

#[test]
fn test_permission_mapping_per_role() {
    assert!(Permissions::for_role(Role::RootAdmin).is_all());
    assert!(Permissions::for_role(Role::Admin).is_all());

    let events = Permissions::for_role(Role::EventManager);
    assert!(events.contains(Permissions::MANAGE_EVENTS | Permissions::EDIT_PLANS));
    assert!(!events.can_manage_music());

    assert_eq!(Permissions::for_role(Role::Finance), Permissions::MANAGE_FINANCE);
    assert_eq!(Permissions::for_role(Role::MemberManager), Permissions::MANAGE_MEMBERS);

    let music = Permissions::for_role(Role::MusicManager);
    assert!(music.can_manage_music());
    assert!(music.can_edit_plan());

    let member = Permissions::for_role(Role::MusicMember);
    assert!(member.contains(Permissions::VIEW_MUSIC | Permissions::VIEW_PLANS));
    assert!(!member.can_edit_plan());
}

#[test]
fn test_require_reports_permission_denied() {
    let member = Permissions::from_roles(&[Role::MusicMember].into());
    let err = member.require(Permissions::EDIT_PLANS).unwrap_err();
    assert_eq!(err.code, ErrorCode::PermissionDenied);
    assert!(err.message.contains("edit_plans"));

    let manager = Permissions::from_roles(&[Role::MusicMember, Role::MusicManager].into());
    assert!(manager.require(Permissions::EDIT_PLANS).is_ok());
}
