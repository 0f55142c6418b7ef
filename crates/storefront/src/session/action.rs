//! The session store's action vocabulary.

use velvet_cactus_core::ProductId;

use crate::models::{Product, User, UserUpdate};

/// A state transition request.
///
/// Every mutation of [`super::AppState`] is expressed as one of these
/// variants and applied by [`super::SessionStore::dispatch`]. Operating on
/// an ID that is not present is a silent no-op, never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Add one unit of a product to the cart.
    ///
    /// Increments the quantity when the product is already in the cart;
    /// appends a new line with quantity one otherwise.
    AddToCart(Product),
    /// Remove a cart line entirely, regardless of quantity.
    RemoveFromCart(ProductId),
    /// Set the quantity of a cart line. Values of zero or below remove the
    /// line.
    UpdateQuantity {
        /// Product whose line is updated.
        id: ProductId,
        /// New quantity; non-positive values remove the line.
        quantity: i64,
    },
    /// Empty the cart.
    ClearCart,
    /// Flip the cart panel's visibility.
    ToggleCart,
    /// Show the cart panel.
    OpenCart,
    /// Hide the cart panel.
    CloseCart,
    /// Add a product to the wishlist unless it is already there.
    AddToWishlist(Product),
    /// Remove a product from the wishlist.
    RemoveFromWishlist(ProductId),
    /// Sign a user in, replacing any existing session user.
    Login(User),
    /// Sign out and drop all session-scoped data (cart and wishlist too).
    Logout,
    /// Patch the signed-in user's profile. No-op when nobody is signed in.
    UpdateUser(UserUpdate),
}

impl Action {
    /// Stable action name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddToCart(_) => "add_to_cart",
            Self::RemoveFromCart(_) => "remove_from_cart",
            Self::UpdateQuantity { .. } => "update_quantity",
            Self::ClearCart => "clear_cart",
            Self::ToggleCart => "toggle_cart",
            Self::OpenCart => "open_cart",
            Self::CloseCart => "close_cart",
            Self::AddToWishlist(_) => "add_to_wishlist",
            Self::RemoveFromWishlist(_) => "remove_from_wishlist",
            Self::Login(_) => "login",
            Self::Logout => "logout",
            Self::UpdateUser(_) => "update_user",
        }
    }
}
