//! The widget as a Yew component.
//!
//! Messages are [`AppEvent`]s. `update` hands them to the [`App`] and then
//! carries out the returned actions, the same way the terminal runtime does:
//! subscriptions are acquired and released here, focus is deferred until
//! after the next render.

use tridigit_app::{
    App, AppAction, AppEvent, DisplayFlags, EnvChange, Mode, Showing, css_transform, strings,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    styles,
    subscription::{BrowserSubscription, sample_environment},
};

/// CSS classes for the element wrapping the displayed number.
pub fn wrapper_classes(flags: DisplayFlags) -> Vec<&'static str> {
    flags.transforms().into_iter().map(|t| t.css_class()).collect()
}

/// Inline style carrying the composed transform.
pub fn transform_style(flags: DisplayFlags) -> String {
    format!("transform: {};", css_transform(&flags.transforms()))
}

/// Three-digit input that switches into a full-screen display.
pub struct TriDigit {
    app: App,
    input_ref: NodeRef,
    subscription: Option<BrowserSubscription>,
    focus_pending: bool,
}

impl TriDigit {
    /// Run actions until none remain. Returns whether to re-render.
    fn process_actions(&mut self, ctx: &Context<Self>, initial: Vec<AppAction>) -> bool {
        let mut should_render = false;
        let mut pending = initial;

        while !pending.is_empty() {
            for action in std::mem::take(&mut pending) {
                match action {
                    AppAction::Render => should_render = true,
                    AppAction::FocusInput => self.focus_pending = true,
                    AppAction::StartDisplay { session } => {
                        self.subscription = None;
                        let period = self.app.config().mirror_interval;
                        match BrowserSubscription::acquire(ctx.link(), session, period) {
                            Ok(subscription) => self.subscription = Some(subscription),
                            Err(e) => tracing::warn!(?e, %session, "display subscription failed"),
                        }
                        if let Some(sample) = sample_environment() {
                            let event = AppEvent::Environment { change: EnvChange::Initial, sample };
                            pending.extend(self.app.handle(event));
                        }
                    },
                    AppAction::StopDisplay { session } => {
                        tracing::debug!(%session, "display stopped");
                        self.subscription = None;
                    },
                    // A page cannot quit itself.
                    AppAction::Quit => {},
                }
            }
        }

        should_render
    }

    /// Put the field back in line with the buffer after a rejected edit.
    fn sync_field(&self) {
        if let Some(input) = self.input_ref.cast::<HtmlInputElement>()
            && input.value() != self.app.buffer()
        {
            input.set_value(self.app.buffer());
        }
    }

    fn view_input(&self, ctx: &Context<Self>, buffer: &str) -> Html {
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            AppEvent::Edit(input.value())
        });
        let onclear = ctx.link().callback(|_: MouseEvent| AppEvent::Clear);

        html! {
            <main class="input-mode">
                <h1 class="title">{ strings::TITLE }</h1>
                <div class="field-row">
                    <input
                        ref={self.input_ref.clone()}
                        class="digits"
                        type="text"
                        inputmode="numeric"
                        pattern="[0-9]*"
                        autocomplete="off"
                        maxlength="3"
                        aria-label={strings::TITLE}
                        placeholder={strings::PLACEHOLDER}
                        value={buffer.to_string()}
                        {oninput}
                    />
                    <button class="clear" type="button" onclick={onclear}>{ "✕" }</button>
                </div>
            </main>
        }
    }

    fn view_display(ctx: &Context<Self>, showing: &Showing) -> Html {
        let ondismiss = ctx.link().callback(|_: MouseEvent| AppEvent::Dismiss);
        let onclose = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            AppEvent::Close
        });

        html! {
            <main class="display-mode" title={strings::TOOLTIP} onclick={ondismiss}>
                <button class="close" type="button" onclick={onclose}>{ "✕" }</button>
                <div
                    class={classes!("number-wrapper", wrapper_classes(showing.flags))}
                    style={transform_style(showing.flags)}
                >
                    <span class="number">{ showing.number.to_string() }</span>
                </div>
            </main>
        }
    }
}

impl Component for TriDigit {
    type Message = AppEvent;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            app: App::default(),
            input_ref: NodeRef::default(),
            subscription: None,
            focus_pending: true,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, event: Self::Message) -> bool {
        let is_edit = matches!(event, AppEvent::Edit(_));
        let actions = self.app.handle(event);
        if is_edit {
            self.sync_field();
        }
        self.process_actions(ctx, actions)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match self.app.mode() {
            Mode::Input(buffer) => self.view_input(ctx, buffer.as_str()),
            Mode::Showing(showing) => Self::view_display(ctx, showing),
        };

        html! {
            <>
                <style>{ styles::CSS }</style>
                { body }
            </>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if !std::mem::take(&mut self.focus_pending) {
            return;
        }
        if let Some(input) = self.input_ref.cast::<HtmlInputElement>()
            && let Err(e) = input.focus()
        {
            tracing::warn!(?e, "failed to focus input");
        }
    }
}

#[cfg(test)]
mod tests {
    use tridigit_app::{EnvSample, Viewport};

    use super::*;

    fn flags(mirrored: bool, angle: i32, width: f64, height: f64) -> DisplayFlags {
        let flags = DisplayFlags::default().with_sample(EnvSample::new(angle, Viewport::new(width, height)));
        if mirrored { flags.toggle_mirror() } else { flags }
    }

    #[test]
    fn cleared_flags_have_no_classes() {
        let flags = flags(false, 0, 800.0, 600.0);
        assert!(wrapper_classes(flags).is_empty());
        assert_eq!(transform_style(flags), "transform: none;");
    }

    #[test]
    fn classes_follow_transform_order() {
        let flags = flags(true, 180, 600.0, 800.0);
        assert_eq!(wrapper_classes(flags), vec!["portrait", "upside-down", "mirrored"]);
        assert_eq!(transform_style(flags), "transform: rotate(90deg) rotate(180deg) scaleX(-1);");
    }

    #[test]
    fn mirror_only() {
        let flags = flags(true, 90, 800.0, 600.0);
        assert_eq!(wrapper_classes(flags), vec!["mirrored"]);
        assert_eq!(transform_style(flags), "transform: scaleX(-1);");
    }
}
