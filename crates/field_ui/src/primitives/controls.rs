use super::*;

use crate::binding::FieldValue;
use crate::button::{ButtonSize, ButtonStyle, ButtonVariant};
use crate::checkbox::{CheckboxProps, CheckboxState};
use crate::config::{use_field_config, FieldConfig};
use crate::density::{Density, FieldVariant};
use crate::ids::FieldIdentity;
use crate::text_field::{
    FieldSlots, TextFieldController, TextFieldProps as FieldProps, TextFieldState,
};

/// Keys bound reactively on `<input>` instead of copied from the snapshot.
const INPUT_SKIP_KEYS: [&str; 2] = ["aria-invalid", "value"];
/// `<textarea>` has no `type`.
const TEXTAREA_SKIP_KEYS: [&str; 3] = ["aria-invalid", "value", "type"];

#[component]
/// Shared button primitive resolving variant and size defaults into `data-ui-*` tokens.
pub fn Button(
    #[prop(optional)] variant: Option<ButtonVariant>,
    #[prop(optional)] size: Option<ButtonSize>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let style = ButtonStyle::resolve(variant, size);
    view! {
        <button
            type=button_type.unwrap_or("button")
            class=merge_layout_class("ui-button", layout_class)
            id=id
            aria-label=move || aria_label.get()
            aria-invalid=move || invalid.get().then(|| "true".to_string())
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=style.variant.token()
            data-ui-size=style.size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

struct TextControlSetup {
    props: FieldProps,
    attrs: Attrs,
    layout_class: Option<&'static str>,
    error_text: Option<String>,
    value: Option<Signal<String>>,
    error: MaybeSignal<bool>,
    callbacks: TextCallbacks,
}

struct TextCallbacks {
    on_update: Option<Callback<String>>,
    on_focus: Option<Callback<FocusEvent>>,
    on_blur: Option<Callback<FocusEvent>>,
}

type UpdateSink = Box<dyn FnMut(FieldValue)>;

/// Reactive shell around a [`TextFieldController`] owned by the current scope.
///
/// Every controller mutation notifies `changed`, which re-runs the `state` memo.
#[derive(Clone, Copy)]
struct TextFieldHandle {
    state: Memo<TextFieldState>,
    controller: StoredValue<TextFieldController<UpdateSink>>,
    changed: Trigger,
    emitted: StoredValue<Option<FieldValue>>,
}

impl TextFieldHandle {
    fn mount(
        config: FieldConfig,
        props: FieldProps,
        attrs: Attrs,
        error: MaybeSignal<bool>,
    ) -> Self {
        let emitted = store_value(None);
        let on_update: UpdateSink = Box::new(move |value| emitted.set_value(Some(value)));
        let controller = store_value(TextFieldController::new(&props, config, on_update));
        let changed = create_trigger();
        let inputs = store_value((props, attrs));
        let state = create_memo(move |_| {
            changed.track();
            let error = error.get();
            inputs.with_value(|(props, attrs)| {
                let props = FieldProps {
                    error: props.error || error,
                    ..props.clone()
                };
                controller.with_value(|controller| controller.resolve(&props, attrs))
            })
        });
        Self {
            state,
            controller,
            changed,
            emitted,
        }
    }

    /// User edit; returns the value the binding emitted for the host.
    fn input(self, next: String) -> Option<FieldValue> {
        self.controller.update_value(|controller| controller.write(next));
        self.changed.notify();
        self.emitted.try_update_value(Option::take).flatten()
    }

    fn focus(self) {
        self.controller.update_value(TextFieldController::focus);
        self.changed.notify();
    }

    fn blur(self) {
        self.controller.update_value(TextFieldController::blur);
        self.changed.notify();
    }

    fn sync_model(self, value: Option<FieldValue>) {
        self.controller.update_value(|controller| controller.sync_model(value));
        self.changed.notify();
    }
}

fn wire_text_control<El: ElementDescriptor + 'static>(
    element: HtmlElement<El>,
    skip: &[&str],
    field: TextFieldHandle,
    input_class: Option<String>,
    callbacks: TextCallbacks,
) -> HtmlElement<El> {
    let state = field.state;
    let snapshot = state.with_untracked(|state| state.input_attrs.clone());
    let TextCallbacks {
        on_update,
        on_focus,
        on_blur,
    } = callbacks;

    apply_attrs(element, &snapshot, skip)
        .attr("class", move || {
            state.with(|state| {
                format!(
                    "ui-field-input {} {}",
                    state.tokens.input_padding,
                    input_class.as_deref().unwrap_or("")
                )
                .trim_end()
                .to_string()
            })
        })
        .attr("aria-invalid", move || {
            state.with(|state| state.invalid().then(|| "true".to_string()))
        })
        .attr("data-ui-slot", "control")
        .prop("value", move || state.with(|state| state.value.clone()))
        .on(ev::input, move |ev| {
            let emitted = field.input(event_target_value(&ev));
            if let (Some(value), Some(on_update)) = (emitted, on_update.as_ref()) {
                on_update.call(value.to_string());
            }
        })
        .on(ev::focus, move |ev| {
            field.focus();
            if let Some(on_focus) = on_focus.as_ref() {
                on_focus.call(ev);
            }
        })
        .on(ev::blur, move |ev| {
            field.blur();
            if let Some(on_blur) = on_blur.as_ref() {
                on_blur.call(ev);
            }
        })
}

fn render_text_control(multiline: bool, setup: TextControlSetup) -> impl IntoView {
    let TextControlSetup {
        props,
        attrs,
        layout_class,
        error_text,
        value,
        error,
        callbacks,
    } = setup;
    let props = FieldProps {
        model_value: value
            .map(|value| FieldValue::from(value.get_untracked()))
            .or(props.model_value),
        ..props
    };
    let label = props.label.clone();
    let supporting_text = props.supporting_text.clone();
    let input_class = props.input_class.clone();
    let field_class = props.field_class.clone();
    let field = TextFieldHandle::mount(use_field_config(), props, attrs, error);
    if let Some(value) = value {
        create_effect(move |_| field.sync_model(Some(FieldValue::from(value.get()))));
    }
    let state = field.state;
    let ids = state.with_untracked(|state| state.core.ids.clone());
    let has_counter = state.with_untracked(|state| state.counter.is_some());

    let (kind, control) = if multiline {
        let control = wire_text_control(
            html::textarea(),
            &TEXTAREA_SKIP_KEYS,
            field,
            input_class,
            callbacks,
        );
        ("text-area", control.into_view())
    } else {
        let control = wire_text_control(
            html::input(),
            &INPUT_SKIP_KEYS,
            field,
            input_class,
            callbacks,
        );
        ("text-field", control.into_view())
    };

    let error_id = ids.error.clone();

    view! {
        <div
            class=merge_layout_class("ui-text-field", layout_class)
            data-ui-primitive="true"
            data-ui-kind=kind
            data-ui-density=move || state.with(|state| state.density.token())
            data-ui-variant=move || state.with(|state| state.variant.token())
            data-ui-invalid=move || bool_token(state.with(|state| state.invalid()))
            data-ui-disabled=move || bool_token(state.with(|state| state.disabled()))
            data-ui-focused=move || bool_token(state.with(|state| state.is_focused))
            data-ui-filled=move || bool_token(state.with(|state| !state.value.is_empty()))
            style=move || {
                state.with(|state| format!("--ui-field-label-top: {}", state.tokens.label_float_top))
            }
        >
            <div
                data-ui-slot="field"
                class=move || {
                    state.with(|state| {
                        format!(
                            "{} {}",
                            state.tokens.field_height,
                            field_class.as_deref().unwrap_or("")
                        )
                        .trim_end()
                        .to_string()
                    })
                }
            >
                {control}
                {label.map(|label| {
                    view! {
                        <label for=ids.base.clone() id=ids.label.clone() data-ui-slot="label">
                            {label}
                        </label>
                    }
                })}
            </div>
            <div data-ui-slot="supporting-row">
                {supporting_text.map(|text| {
                    view! { <span id=ids.helper.clone() data-ui-slot="supporting">{text}</span> }
                })}
                {move || {
                    error_text
                        .clone()
                        .filter(|_| state.with(|state| state.invalid()))
                        .map(|text| {
                            view! {
                                <span id=error_id.clone() role="alert" data-ui-slot="error">
                                    {text}
                                </span>
                            }
                        })
                }}
                {has_counter.then(|| {
                    view! {
                        <span
                            id=ids.counter.clone()
                            data-ui-slot="counter"
                            data-ui-over=move || {
                                bool_token(state.with(|state| state.counter.is_some_and(|c| c.is_over())))
                            }
                        >
                            {move || {
                                state.with(|state| {
                                    state.counter.map(|counter| counter.label()).unwrap_or_default()
                                })
                            }}
                        </span>
                    }
                })}
            </div>
        </div>
    }
}

#[component]
/// Floating-label text input with density tokens, counter, and ARIA wiring.
pub fn TextField(
    #[prop(optional)] density: Option<Density>,
    #[prop(optional)] variant: Option<FieldVariant>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] field_class: Option<String>,
    #[prop(optional, into)] input_class: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] supporting_text: Option<String>,
    #[prop(optional, into)] error_text: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] max_length: Option<u32>,
    #[prop(optional)] show_counter: bool,
    #[prop(optional, into)] default_value: Option<String>,
    #[prop(optional, into)] value: Option<Signal<String>>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    /// Passthrough attributes delegated to the `<input>`.
    #[prop(optional)]
    attrs: Attrs,
    #[prop(optional)] on_update: Option<Callback<String>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
) -> impl IntoView {
    let props = FieldProps {
        default_value: default_value.map(FieldValue::from),
        slots: FieldSlots {
            supporting: supporting_text.is_some(),
            ..FieldSlots::default()
        },
        label,
        density,
        variant,
        field_class,
        input_class,
        input_type: input_type.map(str::to_string),
        max_length,
        show_counter,
        supporting_text,
        ..FieldProps::default()
    };
    render_text_control(
        false,
        TextControlSetup {
            props,
            attrs,
            layout_class,
            error_text,
            value,
            error,
            callbacks: TextCallbacks {
                on_update,
                on_focus,
                on_blur,
            },
        },
    )
}

#[component]
/// Multiline variant of [`TextField`] sharing the same resolver.
pub fn TextArea(
    #[prop(optional)] density: Option<Density>,
    #[prop(optional)] variant: Option<FieldVariant>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] field_class: Option<String>,
    #[prop(optional, into)] input_class: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] supporting_text: Option<String>,
    #[prop(optional, into)] error_text: Option<String>,
    #[prop(optional)] max_length: Option<u32>,
    #[prop(optional)] show_counter: bool,
    #[prop(optional, into)] default_value: Option<String>,
    #[prop(optional, into)] value: Option<Signal<String>>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    /// Passthrough attributes delegated to the `<textarea>`.
    #[prop(optional)]
    attrs: Attrs,
    #[prop(optional)] on_update: Option<Callback<String>>,
) -> impl IntoView {
    let props = FieldProps {
        default_value: default_value.map(FieldValue::from),
        slots: FieldSlots {
            supporting: supporting_text.is_some(),
            ..FieldSlots::default()
        },
        label,
        density,
        variant,
        field_class,
        input_class,
        max_length,
        show_counter,
        supporting_text,
        ..FieldProps::default()
    };
    render_text_control(
        true,
        TextControlSetup {
            props,
            attrs,
            layout_class,
            error_text,
            value,
            error,
            callbacks: TextCallbacks {
                on_update,
                on_focus: None,
                on_blur: None,
            },
        },
    )
}

#[component]
/// Labeled checkbox with density-scaled box and supporting text.
pub fn CheckboxField(
    #[prop(optional)] density: Option<Density>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] supporting_text: Option<String>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    /// Passthrough attributes delegated to the `<input type="checkbox">`.
    #[prop(optional)]
    attrs: Attrs,
    #[prop(optional)] on_change: Option<Callback<bool>>,
) -> impl IntoView {
    let config = use_field_config();
    let identity = FieldIdentity::new(config.id_prefix.clone());
    let props = CheckboxProps {
        density,
        class,
        label,
        supporting_text,
        error: false,
    };
    let input_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("ui-checkbox {extra}"),
        _ => "ui-checkbox".to_string(),
    };
    let label = props.label.clone();
    let supporting_text = props.supporting_text.clone();
    let inputs = store_value((identity, config, props, attrs));
    let state = create_memo(move |_| {
        let error = error.get();
        inputs.with_value(|(identity, config, props, attrs)| {
            let props = CheckboxProps {
                error: props.error || error,
                ..props.clone()
            };
            CheckboxState::derive(identity, config, &props, attrs)
        })
    });
    let initial = state.get_untracked();
    let align = if initial.align_start { "start" } else { "center" };

    let control = apply_attrs(html::input(), &initial.input_attrs, &["aria-invalid", "checked"])
        .attr("class", input_class)
        .attr("data-ui-slot", "control")
        .attr("aria-invalid", move || {
            state.with(|state| state.core.invalid.then(|| "true".to_string()))
        })
        .prop("checked", move || checked.get())
        .on(ev::change, move |ev| {
            if let Some(on_change) = on_change.as_ref() {
                on_change.call(event_target_checked(&ev));
            }
        });

    view! {
        <label
            class=merge_layout_class("ui-checkbox-field", layout_class)
            style=initial.style()
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-density=initial.density.token()
            data-ui-align=align
            data-ui-selected=move || bool_token(checked.get())
            data-ui-invalid=move || bool_token(state.with(|state| state.core.invalid))
            data-ui-disabled=bool_token(initial.core.disabled)
        >
            {control}
            <span data-ui-slot="copy">
                {label.map(|label| {
                    view! { <span id=initial.core.ids.label.clone() data-ui-slot="title">{label}</span> }
                })}
                {supporting_text.map(|text| {
                    view! {
                        <span id=initial.core.ids.helper.clone() data-ui-slot="description">{text}</span>
                    }
                })}
            </span>
        </label>
    }
}
