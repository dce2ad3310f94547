//! Slides and the views they lazily produce.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

/// Navigation callback a view invokes when one of its tap zones is activated.
pub type NavCallback = Box<dyn FnMut()>;

/// Image extensions tried when a resource name has none.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Navigation request raised from inside a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideIntent {
    Next,
    Previous,
}

/// Non-owning handle slides use to reach the carousel.
///
/// Holding a sender never keeps the carousel alive; once the carousel is
/// dropped, sends are silently discarded.
#[derive(Debug, Clone)]
pub struct IntentSender {
    tx: Sender<SlideIntent>,
}

impl IntentSender {
    /// Create a sender together with the receiving end of its queue.
    #[must_use]
    pub fn channel() -> (Self, Receiver<SlideIntent>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }

    /// Queue an intent. Returns `false` when the receiver is gone.
    pub fn send(&self, intent: SlideIntent) -> bool {
        self.tx.send(intent).is_ok()
    }

    /// Build a callback that queues `intent` each time it runs.
    #[must_use]
    pub fn callback(&self, intent: SlideIntent) -> NavCallback {
        let sender = self.clone();
        Box::new(move || {
            sender.send(intent);
        })
    }
}

/// What a slide shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideContent {
    /// A resolved image resource.
    Image {
        name: String,
        path: PathBuf,
        bytes: u64,
    },
    /// Stand-in for a resource that could not be found.
    Placeholder { name: String },
}

impl SlideContent {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Image { name, .. } | Self::Placeholder { name } => name,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// Maps a content identifier to displayable content.
pub trait ContentResolver {
    /// Missing resources must resolve to [`SlideContent::Placeholder`].
    fn resolve(&self, name: &str) -> SlideContent;
}

/// Resolves every name to a placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullResolver;

impl ContentResolver for NullResolver {
    fn resolve(&self, name: &str) -> SlideContent {
        SlideContent::Placeholder {
            name: name.to_string(),
        }
    }
}

/// Looks up image resources in a single directory.
///
/// `name` is tried as given, then with each common image extension appended.
#[derive(Debug, Clone)]
pub struct AssetDirResolver {
    dir: PathBuf,
}

impl AssetDirResolver {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn candidates<'a>(&'a self, name: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
        std::iter::once(self.dir.join(name)).chain(
            IMAGE_EXTENSIONS
                .iter()
                .map(move |ext| self.dir.join(format!("{name}.{ext}"))),
        )
    }
}

impl ContentResolver for AssetDirResolver {
    fn resolve(&self, name: &str) -> SlideContent {
        if !name.is_empty() {
            for path in self.candidates(name) {
                if let Ok(metadata) = fs::metadata(&path)
                    && metadata.is_file()
                {
                    return SlideContent::Image {
                        name: name.to_string(),
                        path,
                        bytes: metadata.len(),
                    };
                }
            }
        }
        tracing::debug!(name, dir = %self.dir.display(), "slide content missing; using placeholder");
        SlideContent::Placeholder {
            name: name.to_string(),
        }
    }
}

/// Which half of a slide was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapZone {
    Left,
    Right,
}

/// Full-bleed view for one slide, split into two equal-width tap zones.
pub struct ItemView {
    title: String,
    content: SlideContent,
    on_next: Option<NavCallback>,
    on_previous: Option<NavCallback>,
}

impl fmt::Debug for ItemView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemView")
            .field("title", &self.title)
            .field("content", &self.content)
            .field("on_next", &self.on_next.is_some())
            .field("on_previous", &self.on_previous.is_some())
            .finish()
    }
}

impl ItemView {
    #[must_use]
    pub fn new(title: impl Into<String>, content: SlideContent) -> Self {
        Self {
            title: title.into(),
            content,
            on_next: None,
            on_previous: None,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &SlideContent {
        &self.content
    }

    pub fn set_on_next(&mut self, callback: NavCallback) {
        self.on_next = Some(callback);
    }

    pub fn set_on_previous(&mut self, callback: NavCallback) {
        self.on_previous = Some(callback);
    }

    /// Zone containing horizontal position `x` in a view `width` wide.
    #[must_use]
    pub fn zone_at(x: f64, width: f64) -> TapZone {
        if x < width / 2.0 {
            TapZone::Left
        } else {
            TapZone::Right
        }
    }

    /// Run the callback bound to `zone`. Returns whether one was installed.
    pub fn activate(&mut self, zone: TapZone) -> bool {
        let callback = match zone {
            TapZone::Left => self.on_previous.as_mut(),
            TapZone::Right => self.on_next.as_mut(),
        };
        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

/// One slide of a carousel: produces and caches its view on demand.
pub trait CarouselItem {
    /// Identifier of the content this slide shows.
    fn content_id(&self) -> &str;

    /// Caption shown alongside the slide.
    fn title(&self) -> &str {
        self.content_id()
    }

    /// Return the cached view, building it on first use with navigation
    /// callbacks wired to `intents`.
    fn view(&mut self, intents: &IntentSender) -> &mut ItemView;

    fn cached_view(&self) -> Option<&ItemView>;

    /// Drop the cached view. The next [`view`](Self::view) call rebuilds it.
    fn release_view(&mut self);
}

/// Slide that shows a single image resource.
pub struct ImageItem {
    title: String,
    image: String,
    resolver: Arc<dyn ContentResolver>,
    view: Option<ItemView>,
}

impl fmt::Debug for ImageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageItem")
            .field("title", &self.title)
            .field("image", &self.image)
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

impl ImageItem {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        image: impl Into<String>,
        resolver: Arc<dyn ContentResolver>,
    ) -> Self {
        Self {
            title: title.into(),
            image: image.into(),
            resolver,
            view: None,
        }
    }

    /// Slide titled after its image name.
    #[must_use]
    pub fn named(image: impl Into<String>, resolver: Arc<dyn ContentResolver>) -> Self {
        let image = image.into();
        Self::new(image.clone(), image, resolver)
    }
}

impl CarouselItem for ImageItem {
    fn content_id(&self) -> &str {
        &self.image
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn view(&mut self, intents: &IntentSender) -> &mut ItemView {
        let Self {
            title,
            image,
            resolver,
            view,
        } = self;
        view.get_or_insert_with(|| {
            let mut view = ItemView::new(title.clone(), resolver.resolve(image));
            view.set_on_next(intents.callback(SlideIntent::Next));
            view.set_on_previous(intents.callback(SlideIntent::Previous));
            view
        })
    }

    fn cached_view(&self) -> Option<&ItemView> {
        self.view.as_ref()
    }

    fn release_view(&mut self) {
        self.view = None;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct CountingResolver {
        calls: Cell<usize>,
    }

    impl ContentResolver for CountingResolver {
        fn resolve(&self, name: &str) -> SlideContent {
            self.calls.set(self.calls.get() + 1);
            NullResolver.resolve(name)
        }
    }

    #[test]
    fn zones_split_view_in_equal_halves() {
        assert_eq!(ItemView::zone_at(0.0, 80.0), TapZone::Left);
        assert_eq!(ItemView::zone_at(39.0, 80.0), TapZone::Left);
        assert_eq!(ItemView::zone_at(40.0, 80.0), TapZone::Right);
        assert_eq!(ItemView::zone_at(79.0, 80.0), TapZone::Right);
    }

    #[test]
    fn left_zone_runs_previous_and_right_zone_runs_next() {
        let log = Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut view = ItemView::new("a", NullResolver.resolve("a"));
        let previous = Rc::clone(&log);
        view.set_on_previous(Box::new(move || previous.borrow_mut().push("previous")));
        let next = Rc::clone(&log);
        view.set_on_next(Box::new(move || next.borrow_mut().push("next")));

        assert!(view.activate(ItemView::zone_at(10.0, 100.0)));
        assert!(view.activate(ItemView::zone_at(90.0, 100.0)));
        assert_eq!(*log.borrow(), vec!["previous", "next"]);
    }

    #[test]
    fn missing_callbacks_are_a_no_op() {
        let mut view = ItemView::new("a", NullResolver.resolve("a"));
        assert!(!view.activate(TapZone::Left));
        assert!(!view.activate(TapZone::Right));
    }

    #[test]
    fn image_item_builds_its_view_once() {
        let resolver = Arc::new(CountingResolver::default());
        let mut item = ImageItem::named("butcher", resolver.clone());
        let (intents, _rx) = IntentSender::channel();

        assert!(item.cached_view().is_none());
        item.view(&intents);
        item.view(&intents);
        assert_eq!(resolver.calls.get(), 1);

        item.release_view();
        assert!(item.cached_view().is_none());
        item.view(&intents);
        assert_eq!(resolver.calls.get(), 2);
    }

    #[test]
    fn image_item_callbacks_queue_intents() {
        let mut item = ImageItem::new("Homelander", "butcher", Arc::new(NullResolver));
        let (intents, rx) = IntentSender::channel();

        let view = item.view(&intents);
        view.activate(TapZone::Right);
        view.activate(TapZone::Left);

        let received: Vec<_> = rx.try_iter().collect();
        assert_eq!(received, vec![SlideIntent::Next, SlideIntent::Previous]);
        assert_eq!(item.title(), "Homelander");
        assert_eq!(item.content_id(), "butcher");
    }

    #[test]
    fn callbacks_outliving_the_queue_do_not_panic() {
        let mut item = ImageItem::named("a", Arc::new(NullResolver));
        let (intents, rx) = IntentSender::channel();
        drop(rx);
        assert!(item.view(&intents).activate(TapZone::Right));
    }

    #[test]
    fn null_resolver_yields_placeholder() {
        let content = NullResolver.resolve("hughei");
        assert!(content.is_placeholder());
        assert_eq!(content.name(), "hughei");
    }

    #[test]
    fn asset_dir_resolver_tries_common_extensions() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("butcher.png"), [0u8; 12]).expect("write asset");
        let resolver = AssetDirResolver::new(dir.path());

        match resolver.resolve("butcher") {
            SlideContent::Image { path, bytes, .. } => {
                assert_eq!(path, dir.path().join("butcher.png"));
                assert_eq!(bytes, 12);
            }
            other => panic!("expected image content, got {other:?}"),
        }
        assert!(resolver.resolve("maeve").is_placeholder());
    }

    #[test]
    fn asset_dir_resolver_ignores_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("atrain")).expect("mkdir");
        let resolver = AssetDirResolver::new(dir.path());
        assert!(resolver.resolve("atrain").is_placeholder());
        assert!(resolver.resolve("").is_placeholder());
    }
}
