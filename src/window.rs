use gpui::{
    AnyElement, ClickEvent, Context, ElementId, FocusHandle, InteractiveElement, IntoElement,
    KeyDownEvent, ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
    div, px, rgb,
};
use tracing::error;

use crate::contact::{
    ContactField, ContactForm, ContactFormValues, ContactFormView, EditBuffer, InputView,
};
use crate::form::FormResult;

const FG: u32 = 0x1f2328;
const MUTED: u32 = 0x8c959f;
const BORDER: u32 = 0xd0d7de;
const FOCUS: u32 = 0x0969da;
const DANGER: u32 = 0xcf222e;
const SURFACE: u32 = 0xffffff;

/// Window root that renders a [`ContactForm`] and feeds keystrokes and
/// clicks back into it.
pub struct ContactFormWindow {
    form: ContactForm,
    editors: [EditBuffer; 4],
    focus_handles: [FocusHandle; 4],
    focused: Option<ContactField>,
}

impl ContactFormWindow {
    pub fn new(form: ContactForm, cx: &mut Context<Self>) -> Self {
        let values = form.values().unwrap_or_else(|err| {
            error!(%err, "reading initial contact form values failed");
            ContactFormValues::default()
        });
        Self {
            editors: ContactField::ALL.map(|field| EditBuffer::new(values.get(field).to_string())),
            focus_handles: ContactField::ALL.map(|_| cx.focus_handle()),
            form,
            focused: None,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    fn focus_field(&mut self, field: ContactField, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(previous) = self.focused.replace(field)
            && previous != field
        {
            report(self.form.on_blur(previous));
        }
        window.focus(&self.focus_handles[field.index()], cx);
        cx.notify();
    }

    fn handle_key(
        &mut self,
        field: ContactField,
        event: &KeyDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let keystroke = &event.keystroke;
        if keystroke.modifiers.control || keystroke.modifiers.platform || keystroke.modifiers.alt
        {
            return;
        }

        match keystroke.key.as_str() {
            "tab" => {
                self.focus_field(field.next(), window, cx);
                cx.stop_propagation();
                return;
            }
            "enter" => {
                self.submit(window, cx);
                cx.stop_propagation();
                return;
            }
            _ => {}
        }

        let editor = &mut self.editors[field.index()];
        let changed = match keystroke.key.as_str() {
            "backspace" => editor.delete_backward(),
            "delete" => editor.delete_forward(),
            "left" => {
                editor.move_left();
                false
            }
            "right" => {
                editor.move_right();
                false
            }
            "home" => {
                editor.move_home();
                false
            }
            "end" => {
                editor.move_end();
                false
            }
            _ => keystroke
                .key_char
                .as_deref()
                .is_some_and(|text| editor.insert_text(text)),
        };

        if changed {
            let value = editor.value().to_string();
            report(self.form.on_field_change(field, value));
        }
        cx.stop_propagation();
        cx.notify();
    }

    fn submit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let outcome = match self.form.on_submit() {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(%err, "contact form submit failed");
                cx.notify();
                return;
            }
        };

        if !outcome.is_accepted() && self.form.controller().options().focus_first_error_on_submit {
            match self.form.first_invalid_field() {
                Ok(Some(field)) => self.focus_field(field, window, cx),
                Ok(None) => {}
                Err(err) => error!(%err, "reading first invalid field failed"),
            }
        }
        cx.notify();
    }

    fn render_input(&self, input: &InputView, cx: &mut Context<Self>) -> AnyElement {
        let field = input.field;
        let editor = &self.editors[field.index()];
        let focused = self.focused == Some(field);
        let label = if input.required {
            format!("{}*", input.label)
        } else {
            input.label.to_string()
        };

        let content: AnyElement = if editor.is_empty() && !focused {
            div()
                .text_color(rgb(MUTED))
                .child(SharedString::from(input.placeholder.unwrap_or_default()))
                .into_any_element()
        } else if focused {
            let (before, after) = editor.split_at_caret();
            div()
                .flex()
                .child(SharedString::from(before.to_string()))
                .child(div().w(px(1.)).h(px(16.)).bg(rgb(FOCUS)))
                .child(SharedString::from(after.to_string()))
                .into_any_element()
        } else {
            div()
                .child(SharedString::from(editor.value().to_string()))
                .into_any_element()
        };

        let element_id = input
            .test_id
            .or(input.placeholder)
            .unwrap_or(input.label);

        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(div().text_sm().child(label))
            .child(
                div()
                    .id(ElementId::Name(SharedString::from(element_id)))
                    .track_focus(&self.focus_handles[field.index()])
                    .px_2()
                    .py_1()
                    .min_h(px(28.))
                    .border_1()
                    .rounded_md()
                    .bg(rgb(SURFACE))
                    .border_color(rgb(if focused {
                        FOCUS
                    } else if input.flagged {
                        DANGER
                    } else {
                        BORDER
                    }))
                    .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                        this.focus_field(field, window, cx);
                    }))
                    .on_key_down(cx.listener(move |this, event: &KeyDownEvent, window, cx| {
                        this.handle_key(field, event, window, cx);
                    }))
                    .child(content),
            )
            .into_any_element()
    }

    fn render_view(&self, view: &ContactFormView, cx: &mut Context<Self>) -> AnyElement {
        let inputs = view
            .inputs
            .iter()
            .map(|input| self.render_input(input, cx))
            .collect::<Vec<_>>();
        let errors = view.errors.iter().enumerate().map(|(index, error)| {
            div()
                .id(ElementId::Name(
                    format!("{}-{index}", error.test_id).into(),
                ))
                .text_color(rgb(DANGER))
                .child(error.text.clone())
        });
        let outputs = view.outputs.iter().map(|output| {
            div()
                .id(ElementId::Name(SharedString::from(output.test_id)))
                .child(output.text.clone())
        });

        div()
            .flex()
            .flex_col()
            .gap_3()
            .p_6()
            .size_full()
            .bg(rgb(SURFACE))
            .text_color(rgb(FG))
            .child(div().text_xl().child(view.header))
            .children(inputs)
            .children(errors)
            .child(
                div()
                    .id("submit")
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .bg(rgb(FOCUS))
                    .text_color(rgb(SURFACE))
                    .cursor_pointer()
                    .child(view.submit_label)
                    .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                        this.submit(window, cx);
                    })),
            )
            .children(outputs)
            .into_any_element()
    }
}

impl Render for ContactFormWindow {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        match self.form.view() {
            Ok(view) => self.render_view(&view, cx),
            Err(err) => {
                error!(%err, "projecting contact form failed");
                div()
                    .p_6()
                    .text_color(rgb(DANGER))
                    .child(err.to_string())
                    .into_any_element()
            }
        }
    }
}

fn report(result: FormResult<()>) {
    if let Err(err) = result {
        error!(%err, "contact form update failed");
    }
}
