use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::state::ProductListState;
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::product::api_client::ProductApi;
use crate::domain::product::model::{Product, ProductFormData, UpdateProductPayload};
use crate::domain::product::query::ListQuery;
use crate::domain::session::SessionContext;
use crate::domain::shared::value_objects::ProductId;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

pub(crate) const AUTH_FAILED: &str = "Authentication failed";
const FETCH_FAILED: &str = "Failed to fetch products";
pub(crate) const DELETE_FAILED: &str = "Failed to delete product";
const SAVE_FAILED: &str = "Failed to save product";

struct ProductPage {
    products: Vec<Product>,
    total: u64,
}

/// Owns what the product list shows and keeps it in step with the backend.
///
/// State is published through a [`watch`] channel; only the completion of the
/// most recently issued fetch may write `products`, `total` and the derived
/// figures. Mutations never patch the list locally, they end in a refetch.
///
/// [`ProductListCoordinator::handle_search`] spawns its debounce timer, so it
/// must be called from within a Tokio runtime.
pub struct ProductListCoordinator {
    session: Arc<dyn SessionContext>,
    api: Arc<dyn ProductApi>,
    notifier: Arc<dyn Notifier>,
    logger: Arc<dyn Logger>,
    state: watch::Sender<ProductListState>,
    fetch_sequence: AtomicU64,
    mounted: AtomicBool,
    pending_search: Mutex<Option<JoinHandle<()>>>,
    debounce: Duration,
}

impl ProductListCoordinator {
    pub fn new(
        session: Arc<dyn SessionContext>,
        api: Arc<dyn ProductApi>,
        notifier: Arc<dyn Notifier>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let (state, _) = watch::channel(ProductListState::default());
        Self {
            session,
            api,
            notifier,
            logger,
            state,
            fetch_sequence: AtomicU64::new(0),
            mounted: AtomicBool::new(true),
            pending_search: Mutex::new(None),
            debounce: SEARCH_DEBOUNCE,
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<ProductListState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ProductListState {
        self.state.borrow().clone()
    }

    fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    fn is_latest(&self, sequence: u64) -> bool {
        self.is_mounted() && self.fetch_sequence.load(Ordering::SeqCst) == sequence
    }

    /// Loads the page described by the current state.
    ///
    /// Does nothing without a signed-in user. On failure the list is left as
    /// it was and a notification is raised; nothing is retried.
    pub async fn fetch_products(&self) {
        self.fetch_with(|_| {}).await;
    }

    /// Applies `update`, then fetches. The update, the `loading` flag and the
    /// sequence number are taken under one write so the query always matches
    /// the state it was issued for.
    async fn fetch_with(&self, update: impl FnOnce(&mut ProductListState)) {
        if !self.is_mounted() {
            return;
        }
        let signed_in = self.session.current_user().is_some();

        let mut issued = None;
        self.state.send_modify(|s| {
            update(s);
            if signed_in {
                s.loading = true;
                let sequence = self.fetch_sequence.fetch_add(1, Ordering::SeqCst) + 1;
                issued = Some((sequence, s.list_query()));
            }
        });
        let Some((sequence, query)) = issued else {
            self.logger.debug("Skipping product fetch: no signed-in user");
            return;
        };

        let _in_flight = InFlightFetch {
            coordinator: self,
            sequence,
        };
        let outcome = self.load_page(&query).await;

        if !self.is_latest(sequence) {
            self.logger.debug(&format!(
                "Discarding superseded product fetch #{} (offset {}, search {:?})",
                sequence, query.offset, query.search
            ));
            return;
        }

        match outcome {
            Ok(page) => self.state.send_modify(|s| {
                s.apply_page(page.products, page.total);
                s.loading = false;
            }),
            Err(message) => {
                self.state.send_modify(|s| s.loading = false);
                self.notifier.error(message);
            }
        }
    }

    async fn load_page(&self, query: &ListQuery) -> Result<ProductPage, &'static str> {
        let token = self.session.get_token().await.ok_or(AUTH_FAILED)?;

        let envelope = self
            .api
            .list_products(query, &token)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Error fetching products: {}", e));
                FETCH_FAILED
            })?
            .into_result()
            .map_err(|e| {
                self.logger
                    .warn(&format!("Product list rejected: {}", e));
                FETCH_FAILED
            })?;

        let total = envelope.pagination.as_ref().map_or(0, |p| p.total);
        Ok(ProductPage {
            products: envelope.data.unwrap_or_default(),
            total,
        })
    }

    /// Records the raw term and jumps back to page 1 right away; the fetch
    /// waits until the term has been stable for the debounce interval.
    pub fn handle_search(self: &Arc<Self>, term: impl Into<String>) {
        if !self.is_mounted() {
            return;
        }
        let term = term.into();
        self.state.send_modify(|s| {
            s.search_term = term.clone();
            s.current_page = 1;
        });

        let coordinator: Weak<Self> = Arc::downgrade(self);
        let delay = self.debounce;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(coordinator) = coordinator.upgrade() else {
                return;
            };
            coordinator
                .fetch_with(|s| s.debounced_search_term = term)
                .await;
        });

        if let Ok(mut pending) = self.pending_search.lock()
            && let Some(previous) = pending.replace(task)
        {
            previous.abort();
        }
    }

    pub async fn handle_page_change(&self, page: u32, size: Option<u32>) {
        self.fetch_with(|s| {
            s.current_page = page.max(1);
            if let Some(size) = size.filter(|size| *size > 0) {
                s.page_size = size;
            }
        })
        .await;
    }

    pub fn handle_create(&self) {
        self.state.send_modify(|s| {
            s.editing_product = None;
            s.modal_visible = true;
        });
    }

    pub fn handle_edit(&self, product: Product) {
        self.state.send_modify(|s| {
            s.editing_product = Some(product);
            s.modal_visible = true;
        });
    }

    pub fn close_modal(&self) {
        self.state.send_modify(|s| {
            s.modal_visible = false;
            s.editing_product = None;
        });
    }

    /// Deletes on the server, then refetches. Ignored while another delete
    /// is still in flight.
    pub async fn handle_delete(&self, product_id: &str) {
        let Some(id) = ProductId::parse(product_id) else {
            self.logger.warn("Refusing to delete a product with a blank id");
            self.notifier.error(DELETE_FAILED);
            return;
        };

        if !self.try_begin(|s| &mut s.deleting) {
            self.logger
                .warn(&format!("Delete of {} ignored: another delete is running", id));
            return;
        }

        let outcome = self.delete_remote(&id).await;
        self.state.send_modify(|s| s.deleting = false);

        if !self.is_mounted() {
            return;
        }
        match outcome {
            Ok(()) => {
                self.notifier.success("Product deleted successfully");
                self.fetch_products().await;
            }
            Err(message) => self.notifier.error(message),
        }
    }

    async fn delete_remote(&self, id: &ProductId) -> Result<(), &'static str> {
        let token = self.session.get_token().await.ok_or(AUTH_FAILED)?;
        self.api
            .delete_product(id, &token)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Error deleting product {}: {}", id, e));
                DELETE_FAILED
            })?
            .into_result()
            .map_err(|e| {
                self.logger
                    .warn(&format!("Delete of {} rejected: {}", id, e));
                DELETE_FAILED
            })?;
        Ok(())
    }

    /// Creates or updates depending on whether a product is being edited.
    /// On failure the modal stays open so the user can correct and retry.
    pub async fn handle_submit(&self, values: ProductFormData) {
        if let Err(e) = values.validate() {
            self.logger.debug(&format!("Product form rejected: {}", e));
            self.notifier.error(e.user_message());
            return;
        }

        if !self.try_begin(|s| &mut s.submitting) {
            self.logger
                .warn("Product submit ignored: another submit is running");
            return;
        }

        let editing = self.state.borrow().editing_product.clone();
        let outcome = self.save_remote(editing.as_ref(), values).await;
        self.state.send_modify(|s| s.submitting = false);

        if !self.is_mounted() {
            return;
        }
        match outcome {
            Ok(message) => {
                self.notifier.success(message);
                self.close_modal();
                self.fetch_products().await;
            }
            Err(message) => self.notifier.error(message),
        }
    }

    async fn save_remote(
        &self,
        editing: Option<&Product>,
        values: ProductFormData,
    ) -> Result<&'static str, &'static str> {
        let token = self.session.get_token().await.ok_or(AUTH_FAILED)?;

        let result = match editing {
            Some(product) => {
                let id = product.id().ok_or(SAVE_FAILED)?;
                let payload = UpdateProductPayload::new(&id, values);
                self.api
                    .update_product(&payload, &token)
                    .await
                    .map(|envelope| (envelope.into_result().is_ok(), "Product updated successfully"))
            }
            None => self
                .api
                .create_product(&values, &token)
                .await
                .map(|envelope| (envelope.into_result().is_ok(), "Product created successfully")),
        };

        match result {
            Ok((true, message)) => Ok(message),
            Ok((false, _)) => {
                self.logger.warn("Product save rejected by the server");
                Err(SAVE_FAILED)
            }
            Err(e) => {
                self.logger.error(&format!("Error saving product: {}", e));
                Err(SAVE_FAILED)
            }
        }
    }

    /// Atomically flips a guard flag from false to true. Returns false when it
    /// was already set.
    fn try_begin(&self, flag: impl Fn(&mut ProductListState) -> &mut bool) -> bool {
        let mut started = false;
        self.state.send_if_modified(|s| {
            let flag = flag(s);
            if *flag {
                false
            } else {
                *flag = true;
                started = true;
                true
            }
        });
        started
    }

    /// Detaches the coordinator from the screen: the pending debounce is
    /// cancelled and fetches still in flight will not touch state.
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
        if let Ok(mut pending) = self.pending_search.lock()
            && let Some(task) = pending.take()
        {
            task.abort();
        }
    }
}

/// Clears `loading` when the latest fetch ends without committing, e.g. when
/// its debounce task is aborted mid-request.
struct InFlightFetch<'a> {
    coordinator: &'a ProductListCoordinator,
    sequence: u64,
}

impl Drop for InFlightFetch<'_> {
    fn drop(&mut self) {
        if !self.coordinator.is_latest(self.sequence) {
            return;
        }
        self.coordinator.state.send_if_modified(|s| {
            let was_loading = s.loading;
            s.loading = false;
            was_loading
        });
    }
}

impl Drop for ProductListCoordinator {
    fn drop(&mut self) {
        if let Ok(pending) = self.pending_search.get_mut()
            && let Some(task) = pending.take()
        {
            task.abort();
        }
    }
}
