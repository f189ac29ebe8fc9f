//! Role-gated dashboard composition.
//!
//! The three dashboards are mutually exclusive views selected solely by
//! role; there is no capability composition, so an owner never sees the
//! admin view. Composition assembles plain data for a renderer - no markup
//! here.

use thiserror::Error;

use ratewise_core::Role;

use crate::models::{Rating, Session, Store, User};
use crate::services::directory::{UserDirectory, UserQuery};
use crate::services::ratings::{RatingService, StoreQuery};

/// Which view a session may reach.
///
/// Transitions happen only on `authenticate`/`end_session`; this is a
/// discriminated dispatch, not a state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    /// No session: the login view.
    Login,
    /// Administrator dashboard.
    Admin,
    /// Regular user dashboard.
    User,
    /// Store owner dashboard.
    Owner,
}

impl DashboardView {
    /// Select the view for a session. No session means login.
    #[must_use]
    pub fn select(session: Option<&Session>) -> Self {
        match session.map(Session::role) {
            None => Self::Login,
            Some(Role::Admin) => Self::Admin,
            Some(Role::User) => Self::User,
            Some(Role::Owner) => Self::Owner,
        }
    }
}

/// Errors from dashboard composition.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The session's role does not reach the requested view.
    #[error("the {actual} role cannot reach this view")]
    WrongRole {
        /// The session's actual role.
        actual: Role,
    },
}

/// Platform totals shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformStats {
    /// Registered users on the platform.
    pub total_users: usize,
    /// Registered stores.
    pub total_stores: usize,
    /// Submitted ratings.
    pub total_ratings: usize,
}

/// Admin view data: totals plus the managed listings.
#[derive(Debug, Clone)]
pub struct AdminDashboard {
    /// Platform totals.
    pub stats: PlatformStats,
    /// Stores, per the caller's query.
    pub stores: Vec<Store>,
    /// Users, per the caller's query.
    pub users: Vec<User>,
}

/// Owner view data: the owner's store, if any, with its feedback.
///
/// An owner without a registered store gets an empty overview, not an
/// error.
#[derive(Debug, Clone, Default)]
pub struct OwnerDashboard {
    /// The managed store with its current aggregates.
    pub store: Option<Store>,
    /// Ratings for the managed store, newest first.
    pub ratings: Vec<Rating>,
}

/// One entry in the regular user's store browser.
#[derive(Debug, Clone)]
pub struct StoreCard {
    /// The store with its current aggregates.
    pub store: Store,
    /// The caller's own rating, when they already rated this store.
    pub own_rating: Option<Rating>,
}

/// Compose the administrator dashboard.
///
/// # Errors
///
/// Returns `DashboardError::WrongRole` unless the session role is `Admin`.
pub fn admin_dashboard(
    session: &Session,
    ratings: &RatingService,
    directory: &UserDirectory,
    stores_query: &StoreQuery,
    users_query: &UserQuery,
) -> Result<AdminDashboard, DashboardError> {
    require_role(session, Role::Admin)?;

    Ok(AdminDashboard {
        stats: PlatformStats {
            total_users: directory.user_count(),
            total_stores: ratings.store_count(),
            total_ratings: ratings.rating_count(),
        },
        stores: ratings.list_stores(stores_query),
        users: directory.list_users(users_query),
    })
}

/// Compose the store owner dashboard.
///
/// # Errors
///
/// Returns `DashboardError::WrongRole` unless the session role is `Owner`.
pub fn owner_overview(
    session: &Session,
    ratings: &RatingService,
) -> Result<OwnerDashboard, DashboardError> {
    require_role(session, Role::Owner)?;

    let Some(store) = ratings.find_store_by_owner(session.user_id()) else {
        return Ok(OwnerDashboard::default());
    };

    Ok(OwnerDashboard {
        ratings: ratings.list_ratings_for_store(&store.id),
        store: Some(store.clone()),
    })
}

/// Compose the regular user's store browser: each store paired with the
/// caller's own rating, so a renderer can offer "rate" or "update".
///
/// # Errors
///
/// Returns `DashboardError::WrongRole` unless the session role is `User`.
pub fn user_store_cards(
    session: &Session,
    ratings: &RatingService,
    query: &StoreQuery,
) -> Result<Vec<StoreCard>, DashboardError> {
    require_role(session, Role::User)?;

    Ok(ratings
        .list_stores(query)
        .into_iter()
        .map(|store| {
            let own_rating = ratings.get_rating(session.user_id(), &store.id);
            StoreCard { store, own_rating }
        })
        .collect())
}

fn require_role(session: &Session, required: Role) -> Result<(), DashboardError> {
    if session.role() == required {
        Ok(())
    } else {
        Err(DashboardError::WrongRole {
            actual: session.role(),
        })
    }
}
