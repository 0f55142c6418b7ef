//! The session store: a reducer over [`AppState`].

use tracing::debug;

use velvet_cactus_core::{Price, ProductId};

use crate::models::{CartItem, Product, User, UserUpdate};

use super::{Action, AppState};

/// Owns one session's [`AppState`] and applies [`Action`]s to it.
///
/// Construct one store per session and pass it to whatever needs it; there
/// is no global instance. Transitions are synchronous and atomic: each
/// [`dispatch`](Self::dispatch) call commits fully before the next state
/// can be observed. The store is not internally synchronized; wrap it in a
/// single-writer lock or an owning task if transitions can arrive from
/// multiple threads.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    state: AppState,
}

impl SessionStore {
    /// Create a store with an empty cart and wishlist, the cart panel
    /// closed, and nobody signed in.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state snapshot.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply a single action.
    ///
    /// This is the only place session state changes. Every variant is
    /// handled here, so the compiler guarantees no action is forgotten.
    pub fn dispatch(&mut self, action: Action) {
        debug!(action = action.name(), "Applying session action");

        match action {
            Action::AddToCart(product) => {
                if let Some(item) = self
                    .state
                    .cart
                    .iter_mut()
                    .find(|item| item.product.id == product.id)
                {
                    item.quantity = item.quantity.saturating_add(1);
                } else {
                    self.state.cart.push(CartItem {
                        product,
                        quantity: 1,
                    });
                }
            }

            Action::RemoveFromCart(id) => {
                let before = self.state.cart.len();
                self.state.cart.retain(|item| item.product.id != id);
                if self.state.cart.len() == before {
                    debug!(product_id = %id, "Remove from cart ignored, product not in cart");
                }
            }

            Action::UpdateQuantity { id, quantity } => {
                if quantity <= 0 {
                    self.state.cart.retain(|item| item.product.id != id);
                } else if let Some(item) = self
                    .state
                    .cart
                    .iter_mut()
                    .find(|item| item.product.id == id)
                {
                    item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                } else {
                    debug!(product_id = %id, "Quantity update ignored, product not in cart");
                }
            }

            Action::ClearCart => self.state.cart.clear(),

            Action::ToggleCart => self.state.is_cart_open = !self.state.is_cart_open,
            Action::OpenCart => self.state.is_cart_open = true,
            Action::CloseCart => self.state.is_cart_open = false,

            Action::AddToWishlist(product) => {
                if !self.state.is_in_wishlist(&product.id) {
                    self.state.wishlist.push(product);
                }
            }

            Action::RemoveFromWishlist(id) => {
                self.state.wishlist.retain(|product| product.id != id);
            }

            Action::Login(user) => {
                self.state.user = Some(user);
                self.state.is_authenticated = true;
            }

            Action::Logout => {
                // Session-scoped data does not survive sign-out
                self.state.user = None;
                self.state.is_authenticated = false;
                self.state.cart.clear();
                self.state.wishlist.clear();
            }

            Action::UpdateUser(update) => {
                if let Some(user) = self.state.user.as_mut() {
                    update.apply_to(user);
                } else {
                    debug!("Profile update ignored, nobody is signed in");
                }
            }
        }
    }

    // =========================================================================
    // Convenience wrappers around dispatch
    // =========================================================================

    /// Add one unit of a product to the cart.
    pub fn add_to_cart(&mut self, product: Product) {
        self.dispatch(Action::AddToCart(product));
    }

    /// Remove a cart line entirely.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.dispatch(Action::RemoveFromCart(id));
    }

    /// Set a cart line's quantity; non-positive values remove the line.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        self.dispatch(Action::UpdateQuantity { id, quantity });
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.dispatch(Action::ClearCart);
    }

    /// Flip the cart panel's visibility.
    pub fn toggle_cart(&mut self) {
        self.dispatch(Action::ToggleCart);
    }

    /// Show the cart panel.
    pub fn open_cart(&mut self) {
        self.dispatch(Action::OpenCart);
    }

    /// Hide the cart panel.
    pub fn close_cart(&mut self) {
        self.dispatch(Action::CloseCart);
    }

    /// Add a product to the wishlist unless it is already there.
    pub fn add_to_wishlist(&mut self, product: Product) {
        self.dispatch(Action::AddToWishlist(product));
    }

    /// Remove a product from the wishlist.
    pub fn remove_from_wishlist(&mut self, id: ProductId) {
        self.dispatch(Action::RemoveFromWishlist(id));
    }

    /// Move a wishlisted product into the cart.
    ///
    /// Composed of an add-to-cart and a wishlist removal, exactly as the
    /// wishlist page drives it. Out-of-stock products stay put, and an ID
    /// that is not wishlisted is a silent no-op.
    pub fn move_to_cart(&mut self, id: &ProductId) {
        let Some(product) = self
            .state
            .wishlist
            .iter()
            .find(|product| &product.id == id)
            .cloned()
        else {
            debug!(product_id = %id, "Move to cart ignored, product not in wishlist");
            return;
        };

        if !product.in_stock {
            debug!(product_id = %id, "Move to cart ignored, product out of stock");
            return;
        }

        self.dispatch(Action::AddToCart(product));
        self.dispatch(Action::RemoveFromWishlist(id.clone()));
    }

    /// Sign a user in, replacing any existing session user.
    pub fn login(&mut self, user: User) {
        self.dispatch(Action::Login(user));
    }

    /// Sign out and drop all session-scoped data.
    pub fn logout(&mut self) {
        self.dispatch(Action::Logout);
    }

    /// Patch the signed-in user's profile.
    pub fn update_user(&mut self, update: UserUpdate) {
        self.dispatch(Action::UpdateUser(update));
    }

    // =========================================================================
    // Derived queries
    // =========================================================================

    /// Total number of units across all cart lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.state.total_items()
    }

    /// Sum of unit price times quantity across all cart lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.state.total_price()
    }

    /// Whether the wishlist contains a product with this ID.
    #[must_use]
    pub fn is_in_wishlist(&self, id: &ProductId) -> bool {
        self.state.is_in_wishlist(id)
    }
}
