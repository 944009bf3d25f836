pub mod mount;
pub mod runner;

pub use mount::MountState;
pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner, created lazily on first use
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (lifecycle, frame tick, pointer/control input,
///   frame and buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
///
/// mod game;
/// use game::MyGame;
///
/// orrery_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `orrery_engine::Game`
///   and has a `new()` constructor
/// - `$game_name`: A string literal used in log messages
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.get_or_insert_with(|| {
                    console_error_panic_hook::set_once();
                    let _ = console_log::init_with_level(log::Level::Info);
                    $crate::GameRunner::new(<$game_type>::new())
                });
                f(runner)
            })
        }

        fn with_existing<R>(default: R, f: impl FnOnce(&$crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| match cell.borrow().as_ref() {
                Some(runner) => f(runner),
                None => default,
            })
        }

        // ---- Lifecycle ----

        /// Apply a JSON config override. Returns false if the JSON is malformed.
        #[wasm_bindgen]
        pub fn game_configure(json: &str) -> bool {
            with_runner(|r| match r.configure(json) {
                Ok(()) => true,
                Err(err) => {
                    log::warn!("{}: rejected config: {}", $game_name, err);
                    false
                }
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            with_runner(|r| r.init());
            log::info!("{}: mounted", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_mount_failed(reason: &str) {
            with_runner(|r| r.fail(reason));
        }

        /// Tear down the scene; all simulation state is discarded.
        #[wasm_bindgen]
        pub fn game_unmount() {
            RUNNER.with(|cell| cell.borrow_mut().take());
            log::info!("{}: unmounted", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt as f64));
        }

        // ---- Input ----

        #[wasm_bindgen]
        pub fn game_pointer_enter(target: u32) {
            with_runner(|r| r.push_input(InputEvent::PointerEnter { target: EntityId(target) }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_leave(target: u32) {
            with_runner(|r| r.push_input(InputEvent::PointerLeave { target: EntityId(target) }));
        }

        #[wasm_bindgen]
        pub fn game_click(target: u32) {
            with_runner(|r| r.push_input(InputEvent::Click { target: EntityId(target) }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        // ---- Frame accessors ----

        /// 0 = loading, 1 = mounted, 2 = failed.
        #[wasm_bindgen]
        pub fn get_mount_state() -> u32 {
            with_existing(0, |r| r.mount_state().code())
        }

        #[wasm_bindgen]
        pub fn get_fallback_json() -> String {
            with_runner(|r| r.fallback_json())
        }

        #[wasm_bindgen]
        pub fn get_frame_json() -> String {
            with_existing(String::from("[]"), |r| r.frame_json())
        }

        #[wasm_bindgen]
        pub fn get_config_json() -> String {
            with_runner(|r| r.config_json())
        }

        #[wasm_bindgen]
        pub fn get_elapsed_time() -> f64 {
            with_existing(0.0, |r| r.elapsed_time())
        }

        // ---- Buffer accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr())
        }

        #[wasm_bindgen]
        pub fn get_mesh_instances_ptr() -> *const f32 {
            with_runner(|r| r.mesh_instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_mesh_instance_count() -> u32 {
            with_existing(0, |r| r.mesh_instance_count())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_existing(0, |r| r.game_events_len())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_mesh_instances() -> u32 {
            with_runner(|r| r.max_mesh_instances())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
