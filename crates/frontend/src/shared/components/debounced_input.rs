//! Поле ввода с отложенной фиксацией значения
//!
//! # Пример
//!
//! ```ignore
//! <DebouncedInput
//!     value=Signal::derive(move || search.get())
//!     on_change=Callback::new(move |v: String| set_search.set(v))
//!     placeholder="Search..."
//! />
//! ```

use crate::shared::config::{clamp_debounce_ms, use_app_config};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Учёт отложенных фиксаций: не больше одной ожидающей за раз.
///
/// Каждая правка выдаёт новый билет; срабатывает только последний выданный
/// и только один раз.
#[derive(Clone, Copy, Debug, Default)]
pub struct DebounceGate {
    generation: u64,
    pending: bool,
}

impl DebounceGate {
    /// Новая правка: предыдущий билет становится недействительным
    pub fn schedule(&mut self) -> u64 {
        self.generation += 1;
        self.pending = true;
        self.generation
    }

    /// Таймер истёк: `true`, если билет актуален и значение нужно зафиксировать
    pub fn fire(&mut self, ticket: u64) -> bool {
        if self.pending && ticket == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.pending = false;
        self.generation += 1;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Текстовое или числовое поле, которое сообщает значение наружу только
/// после паузы без правок
#[component]
pub fn DebouncedInput(
    /// Внешнее значение; локальный черновик синхронизируется при его изменении
    #[prop(into)]
    value: Signal<String>,
    /// Вызывается с последним значением после паузы
    on_change: Callback<String>,
    /// Пауза в мс (по умолчанию из конфигурации)
    #[prop(optional)]
    debounce_ms: Option<u32>,
    /// "text" (по умолчанию) или "number"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// id связанного datalist
    #[prop(optional, into)]
    list: MaybeProp<String>,
    #[prop(optional, into)]
    min: MaybeProp<String>,
    #[prop(optional, into)]
    max: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let debounce_ms = debounce_ms
        .map(clamp_debounce_ms)
        .unwrap_or_else(|| use_app_config().debounce_ms());

    let (draft, set_draft) = signal(value.get_untracked());

    Effect::new(move |_| {
        set_draft.set(value.get());
    });

    let gate = StoredValue::new(DebounceGate::default());
    let timeout_id = StoredValue::new(None::<i32>);

    let clear_timer = move || {
        if let Some(id) = timeout_id.try_get_value().flatten() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
        }
        timeout_id.try_set_value(None);
    };

    on_cleanup(move || {
        clear_timer();
        gate.try_update_value(|g| g.cancel());
    });

    let handle_input = move |new_value: String| {
        set_draft.set(new_value.clone());
        clear_timer();

        let Some(ticket) = gate.try_update_value(|g| g.schedule()) else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };

        let callback = Closure::once_into_js(move || {
            let should_commit = gate.try_update_value(|g| g.fire(ticket)).unwrap_or(false);
            if should_commit {
                timeout_id.try_set_value(None);
                on_change.run(new_value);
            }
        });

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<js_sys::Function>(),
            debounce_ms as i32,
        ) {
            Ok(id) => {
                timeout_id.set_value(Some(id));
            }
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
    };

    view! {
        <input
            class=move || class.get().unwrap_or_default()
            type=move || input_type.get().unwrap_or_else(|| "text".to_string())
            placeholder=move || placeholder.get().unwrap_or_default()
            list=move || list.get()
            min=move || min.get()
            max=move || max.get()
            prop:value=move || draft.get()
            on:input=move |ev| handle_input(event_target_value(&ev))
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_edit_commits() {
        let mut gate = DebounceGate::default();
        let t1 = gate.schedule();
        let t2 = gate.schedule();
        let t3 = gate.schedule();

        // Stale timers expire without committing
        assert!(!gate.fire(t1));
        assert!(!gate.fire(t2));
        assert!(gate.fire(t3));
    }

    #[test]
    fn test_exactly_one_commit_per_quiet_window() {
        let mut gate = DebounceGate::default();
        let ticket = gate.schedule();
        assert!(gate.is_pending());
        assert!(gate.fire(ticket));
        assert!(!gate.fire(ticket));
        assert!(!gate.is_pending());
    }

    #[test]
    fn test_cancel_drops_pending_commit() {
        let mut gate = DebounceGate::default();
        let ticket = gate.schedule();
        gate.cancel();
        assert!(!gate.fire(ticket));
        assert!(!gate.is_pending());
    }

    #[test]
    fn test_edit_after_commit_schedules_again() {
        let mut gate = DebounceGate::default();
        let first = gate.schedule();
        assert!(gate.fire(first));
        let second = gate.schedule();
        assert!(gate.fire(second));
    }
}
