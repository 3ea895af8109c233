use std::rc::Rc;

use tracing::debug;

use crate::config::Config;
use crate::event::{EventBus, HostSignal, PaletteNotice};

use super::catalog::{self, EntryMap};
use super::dispatch;
use super::highlight;
use super::layout::{LayoutController, StateChange};
use super::registry::ProviderRegistry;
use super::render;
use super::surface::PaletteSurface;
use super::types::{DispatchOutcome, EntryProvider, PointerEvent};

/// The palette orchestrator: routes host signals through the rebuild
/// pipeline (collect, build, render, relayout) and fans interactions out to
/// the dispatcher and highlighter.
///
/// Everything runs synchronously inside the handler that invoked it.
/// Rebuild-from-within-rebuild cannot happen: registration needs `&mut`
/// access to both palette and bus, so contributions made while a rebuild is
/// pending are simply picked up by the next one.
pub struct Palette {
    registry: ProviderRegistry,
    layout: LayoutController,
    surface: PaletteSurface,
    catalog: EntryMap,
    diagram_ready: bool,
    rebuild_pending: bool,
}

impl Palette {
    pub fn new(config: &Config) -> Self {
        let mut surface = PaletteSurface::new();
        surface.toggle_title = Some("Toggle palette".to_string());
        Self {
            registry: ProviderRegistry::new(config.providers.default_priority),
            layout: LayoutController::new(config.layout),
            surface,
            catalog: EntryMap::new(),
            diagram_ready: false,
            rebuild_pending: false,
        }
    }

    pub fn surface(&self) -> &PaletteSurface {
        &self.surface
    }

    pub fn catalog(&self) -> &EntryMap {
        &self.catalog
    }

    pub fn is_open(&self) -> bool {
        self.surface.markers.open
    }

    pub fn is_two_column(&self) -> bool {
        self.surface.markers.two_column
    }

    /// Registers a provider. Safe to call before the diagram is ready; the
    /// triggered rebuild is deferred until readiness in that case.
    pub fn register_provider(
        &mut self,
        bus: &mut EventBus,
        priority: Option<u32>,
        provider: Rc<dyn EntryProvider>,
    ) {
        self.registry.register(bus, priority, provider);
        if self.diagram_ready {
            self.rebuild(bus);
        } else {
            self.rebuild_pending = true;
            debug!("palette rebuild deferred until diagram is ready");
        }
    }

    pub fn handle_signal(&mut self, bus: &mut EventBus, signal: HostSignal) {
        match signal {
            HostSignal::DiagramReady => {
                self.diagram_ready = true;
                bus.emit(PaletteNotice::Created);
                self.rebuild(bus);
            }
            HostSignal::LocaleChanged => {
                if self.diagram_ready {
                    self.rebuild(bus);
                } else {
                    self.rebuild_pending = true;
                }
            }
            HostSignal::MountResized { height, .. } => {
                self.layout
                    .on_resize(&mut self.surface, bus, height, self.catalog.len());
            }
            HostSignal::ActiveToolChanged(tool_name) => {
                highlight::highlight(&mut self.surface, &tool_name);
            }
        }
    }

    pub fn open(&mut self, bus: &mut EventBus) {
        self.layout.open(&mut self.surface, bus, self.catalog.len());
    }

    pub fn close(&mut self, bus: &mut EventBus) {
        self.layout.close(&mut self.surface, bus, self.catalog.len());
    }

    pub fn toggle(&mut self, bus: &mut EventBus) {
        self.layout.toggle(&mut self.surface, bus, self.catalog.len());
    }

    pub fn dispatch(
        &self,
        action_name: &str,
        event: &PointerEvent,
        auto_activate: bool,
    ) -> DispatchOutcome {
        dispatch::dispatch(&self.surface, &self.catalog, action_name, event, auto_activate)
    }

    pub fn on_drag_start(&self, event: &PointerEvent) -> DispatchOutcome {
        dispatch::dispatch_drag_start(&self.surface, &self.catalog, event)
    }

    pub fn on_mouse_down(&self, event: &PointerEvent) -> DispatchOutcome {
        dispatch::intercept_mouse_down(event)
    }

    /// Collect, build, render; a rebuild always leaves the palette open with
    /// a freshly derived column count.
    fn rebuild(&mut self, bus: &mut EventBus) {
        self.rebuild_pending = false;
        let providers = self.registry.collect(bus);
        self.catalog = catalog::build(&providers);
        render::render(&mut self.surface, &self.catalog);
        self.layout.apply_state(
            &mut self.surface,
            bus,
            StateChange {
                open: Some(true),
                two_column: None,
            },
            self.catalog.len(),
        );
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::config::Config;
    use crate::event::{EventBus, HostSignal, PaletteNotice};
    use crate::palette::providers::StaticProvider;
    use crate::palette::surface::TOOLS_GROUP;
    use crate::palette::types::{Entry, PointerEvent};

    use super::Palette;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn editor_provider() -> Rc<StaticProvider> {
        Rc::new(StaticProvider::from_iter([
            ("save", Entry::new().with_title("Save")),
            ("zoom-tool", Entry::new().in_group(TOOLS_GROUP).with_title("Zoom")),
        ]))
    }

    #[test]
    fn end_to_end_build_renders_both_groups_and_forces_open() {
        init_tracing();
        let config = Config::default();
        let mut palette = Palette::new(&config);
        let mut bus = EventBus::new();

        palette.register_provider(&mut bus, Some(1000), editor_provider());
        palette.handle_signal(&mut bus, HostSignal::DiagramReady);

        let groups = palette
            .surface()
            .groups()
            .iter()
            .map(|group| group.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(groups, vec!["default", TOOLS_GROUP]);
        assert!(palette.surface().find_entry("save").is_some());
        assert!(palette.surface().find_entry("zoom-tool").is_some());
        assert!(palette.is_open(), "rebuild must end in the open state");
    }

    #[test]
    fn registration_before_readiness_is_deferred_not_dropped() {
        let config = Config::default();
        let mut palette = Palette::new(&config);
        let mut bus = EventBus::new();

        palette.register_provider(&mut bus, None, editor_provider());
        assert!(palette.catalog().is_empty(), "nothing renders before readiness");
        assert!(!palette.is_open());

        palette.handle_signal(&mut bus, HostSignal::DiagramReady);
        assert_eq!(palette.catalog().len(), 2);
    }

    #[test]
    fn diagram_ready_emits_created_then_state_change() {
        let config = Config::default();
        let mut palette = Palette::new(&config);
        let mut bus = EventBus::new();

        palette.handle_signal(&mut bus, HostSignal::DiagramReady);
        let notices = bus.drain_notices();
        assert_eq!(notices[0], PaletteNotice::Created);
        assert!(matches!(
            notices[1],
            PaletteNotice::StateChanged { open: true, .. }
        ));
    }

    #[test]
    fn registration_after_readiness_rebuilds_immediately() {
        let config = Config::default();
        let mut palette = Palette::new(&config);
        let mut bus = EventBus::new();
        palette.handle_signal(&mut bus, HostSignal::DiagramReady);

        palette.register_provider(&mut bus, None, editor_provider());
        assert_eq!(palette.catalog().len(), 2);
        assert!(palette.surface().find_entry("save").is_some());
    }

    #[test]
    fn resize_drives_the_two_column_scenario() {
        let config = Config::default();
        let mut palette = Palette::new(&config);
        let mut bus = EventBus::new();
        palette.register_provider(&mut bus, None, editor_provider());
        palette.handle_signal(&mut bus, HostSignal::DiagramReady);
        assert!(!palette.is_two_column());

        // 2 entries * 46 + 50 = 142 > 100
        palette.handle_signal(
            &mut bus,
            HostSignal::MountResized {
                width: 80,
                height: 100,
            },
        );
        assert!(palette.is_two_column());
        assert!(palette.is_open());
    }

    #[test]
    fn locale_change_rebuilds_with_fresh_provider_output() {
        let config = Config::default();
        let mut palette = Palette::new(&config);
        let mut bus = EventBus::new();

        let titles = Rc::new(RefCell::new("Save"));
        let source = Rc::clone(&titles);
        let provider = crate::palette::providers::FnProvider(move || {
            crate::palette::Contribution::Merge(crate::palette::EntryMap::from_iter([(
                "save",
                Entry::new().with_title(*source.borrow()),
            )]))
        });
        palette.register_provider(&mut bus, None, Rc::new(provider));
        palette.handle_signal(&mut bus, HostSignal::DiagramReady);

        *titles.borrow_mut() = "Speichern";
        palette.handle_signal(&mut bus, HostSignal::LocaleChanged);

        let target = palette.surface().find_entry("save").expect("save should render");
        let element = palette.surface().element(target).expect("element should exist");
        assert_eq!(element.title.as_deref(), Some("Speichern"));
    }

    #[test]
    fn active_tool_signal_highlights_the_rendered_entry() {
        let config = Config::default();
        let mut palette = Palette::new(&config);
        let mut bus = EventBus::new();
        palette.register_provider(&mut bus, None, editor_provider());
        palette.handle_signal(&mut bus, HostSignal::DiagramReady);

        palette.handle_signal(&mut bus, HostSignal::ActiveToolChanged("zoom".to_string()));
        let target = palette
            .surface()
            .find_entry("zoom-tool")
            .expect("tool should render");
        assert!(palette.surface().element(target).expect("element").highlighted);
    }

    #[test]
    fn dispatch_reaches_the_provider_handler_through_the_palette() {
        let config = Config::default();
        let mut palette = Palette::new(&config);
        let mut bus = EventBus::new();

        let clicks = Rc::new(RefCell::new(0));
        let counted = Rc::clone(&clicks);
        let provider = StaticProvider::from_iter([(
            "save",
            Entry::new().on_click(move |_event, _auto| {
                *counted.borrow_mut() += 1;
            }),
        )]);
        palette.register_provider(&mut bus, None, Rc::new(provider));
        palette.handle_signal(&mut bus, HostSignal::DiagramReady);

        let event =
            PointerEvent::at(palette.surface().find_entry("save").expect("save should render"));
        assert!(palette.dispatch("click", &event, false).is_consumed());
        assert!(palette.on_drag_start(&event).is_consumed());
        assert_eq!(*clicks.borrow(), 1, "only the click fires the single action");
    }

    #[test]
    fn empty_registration_set_still_builds_and_opens() {
        let config = Config::default();
        let mut palette = Palette::new(&config);
        let mut bus = EventBus::new();
        palette.handle_signal(&mut bus, HostSignal::DiagramReady);

        assert!(palette.catalog().is_empty());
        assert!(palette.surface().groups().is_empty());
        assert!(palette.is_open());
    }
}
