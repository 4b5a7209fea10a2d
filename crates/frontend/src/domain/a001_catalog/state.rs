//! Pagination state of the catalog page.
//!
//! State changes only through [`CatalogState::update`]. An update may ask for
//! a page to be fetched by returning a [`FetchPage`]; running the request and
//! feeding the result back as [`CatalogEvent::PageLoaded`] /
//! [`CatalogEvent::PageFailed`] is the caller's job (see `controller.rs`).
//!
//! Every category selection starts a new session and bumps `epoch`. Fetches
//! carry the epoch they were issued under, responses from an older session
//! are dropped.

use contracts::domain::a001_catalog::{products_path, Category, PageQuery, Product};

/// Products per request
pub const PAGE_SIZE: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Pending,
    Loaded,
    Failed,
}

/// Phase of the current category session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Loading,
    /// Backend returned a short page, nothing more to load
    Exhausted,
    /// Last fetch failed, no automatic retry
    Failed,
}

/// What the product grid should show
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    Empty,
    Ready,
    Failed(String),
}

#[derive(Clone, Debug)]
pub enum CatalogEvent {
    /// Category list arrived; starts the first session.
    ///
    /// `initial` is a slug restored from the URL, honoured only when it names
    /// one of `categories`.
    CategoriesLoaded {
        categories: Vec<Category>,
        initial: Option<String>,
    },
    CategoriesFailed(String),
    /// `None` selects "All Categories"
    CategorySelected(Option<String>),
    /// The scroll sentinel came into view
    Advance,
    PageLoaded { epoch: u64, products: Vec<Product> },
    PageFailed { epoch: u64, message: String },
}

/// Request for one page, produced by [`CatalogState::update`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchPage {
    pub epoch: u64,
    pub category: Option<String>,
    pub query: PageQuery,
}

impl FetchPage {
    pub fn path(&self) -> String {
        products_path(self.category.as_deref(), self.query)
    }
}

#[derive(Clone, Debug)]
pub struct CatalogState {
    pub categories: Vec<Category>,
    pub categories_status: LoadStatus,
    pub selected_category: Option<String>,
    pub products: Vec<Product>,
    pub offset: usize,
    pub is_loading: bool,
    pub has_more: bool,
    pub failure: Option<String>,
    /// 0 until the first category selection
    pub epoch: u64,
    page_size: usize,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl CatalogState {
    pub fn new(page_size: usize) -> Self {
        Self {
            categories: Vec::new(),
            categories_status: LoadStatus::Pending,
            selected_category: None,
            products: Vec::new(),
            offset: 0,
            is_loading: false,
            has_more: true,
            failure: None,
            epoch: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn update(&mut self, event: CatalogEvent) -> Option<FetchPage> {
        match event {
            CatalogEvent::CategoriesLoaded { categories, initial } => {
                log::debug!("categories loaded: {}", categories.len());
                self.categories = categories;
                self.categories_status = LoadStatus::Loaded;
                let start = initial.filter(|slug| self.categories.iter().any(|c| &c.slug == slug));
                Some(self.start_session(start))
            }
            CatalogEvent::CategoriesFailed(message) => {
                log::error!("Failed to load categories: {}", message);
                self.categories.clear();
                self.categories_status = LoadStatus::Failed;
                None
            }
            CatalogEvent::CategorySelected(category) => Some(self.start_session(category)),
            CatalogEvent::Advance => {
                if !self.can_advance() {
                    log::debug!(
                        "advance ignored: loading={}, has_more={}, epoch={}",
                        self.is_loading,
                        self.has_more,
                        self.epoch
                    );
                    return None;
                }
                self.offset += self.page_size;
                Some(self.load_page(self.offset))
            }
            CatalogEvent::PageLoaded { epoch, products } => {
                if epoch != self.epoch || !self.is_loading {
                    log::debug!(
                        "dropping stale page: epoch {} (current {}), {} items",
                        epoch,
                        self.epoch,
                        products.len()
                    );
                    return None;
                }
                if products.len() < self.page_size {
                    self.has_more = false;
                }
                self.products.extend(products);
                self.is_loading = false;
                None
            }
            CatalogEvent::PageFailed { epoch, message } => {
                if epoch != self.epoch || !self.is_loading {
                    log::debug!("dropping stale failure for epoch {}: {}", epoch, message);
                    return None;
                }
                log::error!("Failed to load products at offset {}: {}", self.offset, message);
                self.failure = Some(message);
                self.is_loading = false;
                None
            }
        }
    }

    fn start_session(&mut self, category: Option<String>) -> FetchPage {
        // Повторный выбор той же категории тоже перезагружает список
        self.selected_category = category.filter(|slug| !slug.is_empty());
        self.products.clear();
        self.offset = 0;
        self.has_more = true;
        self.failure = None;
        self.epoch += 1;
        self.load_page(0)
    }

    fn load_page(&mut self, offset: usize) -> FetchPage {
        self.is_loading = true;
        FetchPage {
            epoch: self.epoch,
            category: self.selected_category.clone(),
            query: PageQuery {
                limit: self.page_size,
                skip: offset,
            },
        }
    }

    /// Gate used by the scroll sentinel
    pub fn can_advance(&self) -> bool {
        self.epoch > 0 && !self.is_loading && self.has_more && self.failure.is_none()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_loading {
            SessionPhase::Loading
        } else if self.failure.is_some() {
            SessionPhase::Failed
        } else if !self.has_more {
            SessionPhase::Exhausted
        } else {
            SessionPhase::Idle
        }
    }

    pub fn view_status(&self) -> ViewStatus {
        if let Some(message) = &self.failure {
            if self.products.is_empty() {
                return ViewStatus::Failed(message.clone());
            }
        }
        if !self.products.is_empty() {
            return ViewStatus::Ready;
        }
        if self.is_loading || (self.epoch == 0 && self.categories_status == LoadStatus::Pending) {
            ViewStatus::Loading
        } else {
            ViewStatus::Empty
        }
    }

    pub fn is_selected(&self, slug: Option<&str>) -> bool {
        self.selected_category.as_deref() == slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn product(n: usize) -> Product {
        Product {
            id: Some(n as u64),
            title: format!("Product {n}"),
            description: String::new(),
            thumbnail: String::new(),
            price: n as f64,
            category: None,
            brand: None,
            rating: None,
        }
    }

    fn products(count: usize) -> Vec<Product> {
        (0..count).map(product).collect()
    }

    /// In-memory backend: (category, skip) -> number of items returned
    struct ScriptedBackend {
        pages: HashMap<(Option<String>, usize), usize>,
        requests: Vec<FetchPage>,
    }

    impl ScriptedBackend {
        fn new(pages: &[(Option<&str>, usize, usize)]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(cat, skip, count)| ((cat.map(str::to_string), *skip), *count))
                    .collect(),
                requests: Vec::new(),
            }
        }

        fn respond(&mut self, request: FetchPage) -> CatalogEvent {
            let count = self
                .pages
                .get(&(request.category.clone(), request.query.skip))
                .copied()
                .unwrap_or(0);
            let epoch = request.epoch;
            self.requests.push(request);
            CatalogEvent::PageLoaded {
                epoch,
                products: products(count),
            }
        }

        /// Apply `event` and serve every fetch it produces
        fn drive(&mut self, state: &mut CatalogState, event: CatalogEvent) {
            if let Some(request) = state.update(event) {
                let response = self.respond(request);
                assert!(state.update(response).is_none());
            }
        }
    }

    fn loaded_state() -> CatalogState {
        let mut state = CatalogState::default();
        state.update(CatalogEvent::CategoriesLoaded {
            categories: categories(),
            initial: None,
        });
        state
    }

    fn categories() -> Vec<Category> {
        vec![
            Category::from_slug("beauty"),
            Category::from_slug("smartphones"),
        ]
    }

    #[test]
    fn test_categories_loaded_starts_unfiltered_session() {
        let mut state = CatalogState::default();
        let mut backend = ScriptedBackend::new(&[(None, 0, 9)]);
        backend.drive(
            &mut state,
            CatalogEvent::CategoriesLoaded {
                categories: categories(),
                initial: None,
            },
        );

        assert_eq!(state.categories.len(), 2);
        assert_eq!(state.categories[0].label, "Beauty");
        assert_eq!(backend.requests.len(), 1);
        assert_eq!(backend.requests[0].category, None);
        assert_eq!(backend.requests[0].query.skip, 0);
        assert_eq!(state.products.len(), 9);
        assert_eq!(state.epoch, 1);
    }

    #[test]
    fn test_categories_loaded_restores_known_slug() {
        let mut state = CatalogState::default();
        let request = state
            .update(CatalogEvent::CategoriesLoaded {
                categories: categories(),
                initial: Some("smartphones".into()),
            })
            .unwrap();
        assert_eq!(request.category.as_deref(), Some("smartphones"));
        assert_eq!(request.query.skip, 0);
        assert!(state.is_selected(Some("smartphones")));
    }

    #[test]
    fn test_categories_loaded_unknown_slug_falls_back_to_all() {
        let mut state = CatalogState::default();
        let request = state
            .update(CatalogEvent::CategoriesLoaded {
                categories: categories(),
                initial: Some("no-such-category".into()),
            })
            .unwrap();
        assert_eq!(request.category, None);
        assert_eq!(request.path(), "/products?limit=9&skip=0");
        assert!(state.is_selected(None));
    }

    #[test]
    fn test_select_resets_before_fetch_resolves() {
        let mut state = loaded_state();
        let mut backend = ScriptedBackend::new(&[(None, 0, 9), (None, 9, 9)]);
        backend.drive(&mut state, CatalogEvent::CategorySelected(None));
        backend.drive(&mut state, CatalogEvent::Advance);
        assert_eq!(state.products.len(), 18);

        let request = state.update(CatalogEvent::CategorySelected(Some("beauty".into())));
        assert!(state.products.is_empty());
        assert_eq!(state.offset, 0);
        assert!(state.has_more);
        assert!(state.is_loading);
        assert_eq!(request.unwrap().query.skip, 0);
    }

    #[test]
    fn test_full_page_keeps_has_more() {
        let mut state = loaded_state();
        let mut backend = ScriptedBackend::new(&[(None, 0, 9)]);
        backend.drive(&mut state, CatalogEvent::CategorySelected(None));

        assert!(state.has_more);
        assert!(!state.is_loading);
        assert!(state.can_advance());
        assert_eq!(state.phase(), SessionPhase::Idle);

        let request = state.update(CatalogEvent::Advance).unwrap();
        assert_eq!(state.offset, 9);
        assert_eq!(request.query, PageQuery { limit: 9, skip: 9 });
    }

    #[test]
    fn test_short_page_exhausts_until_reset() {
        let mut state = loaded_state();
        let mut backend = ScriptedBackend::new(&[(None, 0, 4), (Some("beauty"), 0, 9)]);
        backend.drive(&mut state, CatalogEvent::CategorySelected(None));

        assert!(!state.has_more);
        assert_eq!(state.phase(), SessionPhase::Exhausted);
        assert!(state.update(CatalogEvent::Advance).is_none());
        assert!(!state.has_more);
        assert_eq!(state.offset, 0);

        backend.drive(&mut state, CatalogEvent::CategorySelected(Some("beauty".into())));
        assert!(state.has_more);
        assert_eq!(state.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_advance_refused_while_loading() {
        let mut state = loaded_state();
        let first = state.update(CatalogEvent::CategorySelected(None));
        assert!(first.is_some());
        assert!(state.is_loading);
        assert!(!state.can_advance());

        assert!(state.update(CatalogEvent::Advance).is_none());
        assert!(state.update(CatalogEvent::Advance).is_none());
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_advance_refused_before_first_selection() {
        let mut state = CatalogState::default();
        assert!(!state.can_advance());
        assert!(state.update(CatalogEvent::Advance).is_none());
        assert_eq!(state.view_status(), ViewStatus::Loading);
    }

    #[test]
    fn test_unfiltered_scroll_to_exhaustion() {
        let mut state = loaded_state();
        let mut backend = ScriptedBackend::new(&[(None, 0, 9), (None, 9, 9), (None, 18, 3)]);

        backend.drive(&mut state, CatalogEvent::CategorySelected(None));
        // Sentinel keeps firing, the gate stops it after the short page
        for _ in 0..5 {
            backend.drive(&mut state, CatalogEvent::Advance);
        }

        assert_eq!(state.products.len(), 21);
        assert!(!state.has_more);
        assert_eq!(backend.requests.len(), 3);
        let skips: Vec<usize> = backend.requests.iter().map(|r| r.query.skip).collect();
        assert_eq!(skips, vec![0, 9, 18]);
        assert!(backend.requests.iter().all(|r| r.query.limit == PAGE_SIZE));
        assert_eq!(backend.requests[2].path(), "/products?limit=9&skip=18");
    }

    #[test]
    fn test_switch_category_after_two_pages() {
        let mut state = loaded_state();
        let mut backend = ScriptedBackend::new(&[(None, 0, 9), (None, 9, 9)]);
        backend.drive(&mut state, CatalogEvent::CategorySelected(None));
        backend.drive(&mut state, CatalogEvent::Advance);
        assert_eq!(state.products.len(), 18);
        assert_eq!(state.offset, 9);

        let request = state
            .update(CatalogEvent::CategorySelected(Some("smartphones".into())))
            .unwrap();
        assert!(state.products.is_empty());
        assert_eq!(state.offset, 0);
        assert!(state.is_selected(Some("smartphones")));
        assert_eq!(request.category.as_deref(), Some("smartphones"));
        assert_eq!(request.query.skip, 0);
        assert_eq!(request.path(), "/products/category/smartphones?limit=9&skip=0");
    }

    #[test]
    fn test_empty_first_page_signals_empty() {
        let mut state = loaded_state();
        let mut backend = ScriptedBackend::new(&[]);

        state.update(CatalogEvent::CategorySelected(None));
        assert_eq!(state.view_status(), ViewStatus::Loading);

        let request = FetchPage {
            epoch: state.epoch,
            category: None,
            query: PageQuery { limit: 9, skip: 0 },
        };
        let response = backend.respond(request);
        state.update(response);

        assert_eq!(state.products.len(), 0);
        assert!(!state.is_loading);
        assert_eq!(state.view_status(), ViewStatus::Empty);
    }

    #[test]
    fn test_stale_page_is_dropped() {
        let mut state = loaded_state();
        let stale = state.update(CatalogEvent::CategorySelected(None)).unwrap();
        let fresh = state
            .update(CatalogEvent::CategorySelected(Some("beauty".into())))
            .unwrap();
        assert_ne!(stale.epoch, fresh.epoch);

        state.update(CatalogEvent::PageLoaded {
            epoch: stale.epoch,
            products: products(9),
        });
        assert!(state.products.is_empty());
        assert!(state.is_loading);

        state.update(CatalogEvent::PageLoaded {
            epoch: fresh.epoch,
            products: products(2),
        });
        assert_eq!(state.products.len(), 2);
        assert!(!state.has_more);
    }

    #[test]
    fn test_failure_halts_session_until_reset() {
        let mut state = loaded_state();
        let request = state.update(CatalogEvent::CategorySelected(None)).unwrap();
        state.update(CatalogEvent::PageFailed {
            epoch: request.epoch,
            message: "HTTP error: 500".into(),
        });

        assert!(!state.is_loading);
        assert_eq!(state.phase(), SessionPhase::Failed);
        assert!(!state.can_advance());
        assert_eq!(
            state.view_status(),
            ViewStatus::Failed("HTTP error: 500".into())
        );

        assert!(state.update(CatalogEvent::CategorySelected(None)).is_some());
        assert!(state.failure.is_none());
    }

    #[test]
    fn test_categories_failure_leaves_list_empty() {
        let mut state = CatalogState::default();
        let request = state.update(CatalogEvent::CategoriesFailed("network".into()));
        assert!(request.is_none());
        assert!(!state.is_loading);
        assert!(!state.can_advance());
        assert!(state.update(CatalogEvent::Advance).is_none());
        assert!(state.categories.is_empty());
        assert_eq!(state.categories_status, LoadStatus::Failed);
        assert_eq!(state.epoch, 0);
        assert_eq!(state.view_status(), ViewStatus::Empty);
    }

    #[test]
    fn test_custom_page_size() {
        let mut state = CatalogState::new(4);
        assert_eq!(state.page_size(), 4);
        let request = state.update(CatalogEvent::CategorySelected(None)).unwrap();
        assert_eq!(request.query.limit, 4);
        state.update(CatalogEvent::PageLoaded {
            epoch: request.epoch,
            products: products(4),
        });
        assert!(state.has_more);
        let next = state.update(CatalogEvent::Advance).unwrap();
        assert_eq!(next.query.skip, 4);
    }
}
