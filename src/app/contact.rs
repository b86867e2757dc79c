use leptos::{ev::SubmitEvent, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    contact::{deliver, ContactForm, Field, FormStatus, SubmitTicket, SUBMIT_DELAY},
    nav::Section,
    reveal::CONTACT_FORM,
};

use super::{reveal::Reveal, PageSection, SectionTitle};

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-white/5 border border-white/10 rounded-lg text-foreground placeholder-muted focus:outline-none focus:border-accent/50 transition-colors disabled:opacity-50";

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    // disposed with this component, so a pending completion never fires late
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |ticket: SubmitTicket| {
            deliver(form, ticket);
        },
        SUBMIT_DELAY.as_millis() as f64,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(Ok(ticket)) = form.try_update(ContactForm::submit) {
            start(ticket);
        }
    };

    let status = move || form.with(ContactForm::status);
    let submitting = move || status() == FormStatus::Submitting;
    let value = move |field: Field| move || form.with(|f| f.value(field).to_string());

    view! {
        <PageSection section=Section::Contact>
            <div class="max-w-2xl mx-auto pt-24">
                <SectionTitle
                    lead="Let's"
                    accent="Connect"
                    subtitle="I'm always interested in hearing about new projects and opportunities."
                    centered=true
                />
                <Reveal spec=CONTACT_FORM class="border-2 border-border rounded-2xl">
                    <form on:submit=on_submit class="glass-effect p-8 rounded-xl space-y-6">
                        <input
                            type="text"
                            name=Field::Name.name()
                            placeholder="Your Name"
                            required=true
                            class=INPUT_CLASS
                            prop:value=value(Field::Name)
                            on:input=move |ev| form.update(|f| f.edit(Field::Name, event_target_value(&ev)))
                            disabled=submitting
                        />
                        <input
                            type="email"
                            name=Field::Email.name()
                            placeholder="your@email.com"
                            required=true
                            class=INPUT_CLASS
                            prop:value=value(Field::Email)
                            on:input=move |ev| form.update(|f| f.edit(Field::Email, event_target_value(&ev)))
                            disabled=submitting
                        />
                        <textarea
                            name=Field::Message.name()
                            placeholder="Tell me about your project..."
                            required=true
                            rows=5
                            class=format!("{INPUT_CLASS} resize-none")
                            prop:value=value(Field::Message)
                            on:input=move |ev| form.update(|f| f.edit(Field::Message, event_target_value(&ev)))
                            disabled=submitting
                        />
                        <button
                            type="submit"
                            disabled=submitting
                            class="w-full px-8 py-4 bg-accent text-background font-bold rounded-lg hover:opacity-90 transition-opacity disabled:opacity-50"
                        >
                            {move || match status() {
                                FormStatus::Idle => "Send Message",
                                FormStatus::Submitting => "Sending...",
                                FormStatus::Succeeded => "Message Sent!",
                                FormStatus::Failed => "Try Again",
                            }}
                        </button>
                        {move || match status() {
                            FormStatus::Succeeded => {
                                Some(
                                    view! {
                                        <p class="text-accent text-center" role="status">
                                            "Thanks for reaching out. I'll get back to you soon!"
                                        </p>
                                    }
                                        .into_any(),
                                )
                            }
                            FormStatus::Failed => {
                                Some(
                                    view! {
                                        <p class="text-red-400 text-center" role="alert">
                                            "Something went wrong sending your message. Please try again."
                                        </p>
                                    }
                                        .into_any(),
                                )
                            }
                            _ => None,
                        }}
                    </form>
                </Reveal>
            </div>
        </PageSection>
    }
}
