use leptos::*;
use system_ui::{Icon, IconName, IconSize};

use crate::data::{Credential, CERTIFICATIONS, EDUCATION, IDENTITY};

fn credential_list(entries: &'static [Credential], slot: &'static str) -> impl IntoView {
    entries
        .iter()
        .map(|entry| {
            view! {
                <li data-ui-slot=slot>
                    <div data-ui-slot="title">{entry.title}</div>
                    <div data-ui-slot="issuer">{entry.issuer}</div>
                    <div data-ui-slot="period">{entry.period}</div>
                </li>
            }
        })
        .collect_view()
}

#[component]
/// Static agent dossier: identity card, bio, education, and certifications.
pub fn ProfileApp() -> impl IntoView {
    view! {
        <article class="dossier-profile" data-app-view="profile">
            <div data-ui-slot="identity">
                <figure data-ui-slot="portrait">
                    <Icon icon=IconName::User size=IconSize::Lg />
                    <figcaption>"STATUS: ACTIVE // HIRED"</figcaption>
                </figure>
                <div data-ui-slot="identity-details">
                    <h1>{IDENTITY.name}</h1>
                    <p data-ui-slot="role">{IDENTITY.role}</p>
                    <ul data-ui-slot="contact-lines">
                        <li>
                            <Icon icon=IconName::MapPin size=IconSize::Xs />
                            <span>{IDENTITY.location}</span>
                        </li>
                        <li>
                            <Icon icon=IconName::Hash size=IconSize::Xs />
                            <span>{IDENTITY.phone}</span>
                        </li>
                        <li>
                            <Icon icon=IconName::Globe size=IconSize::Xs />
                            <span>{IDENTITY.email}</span>
                        </li>
                    </ul>
                    <section data-ui-slot="bio">
                        <p>"> BIO_SUMMARY:"</p>
                        <p>{IDENTITY.bio}</p>
                    </section>
                </div>
            </div>
            <div data-ui-slot="records">
                <section>
                    <h3>
                        <Icon icon=IconName::GraduationCap size=IconSize::Sm />
                        "Education"
                    </h3>
                    <ul>{credential_list(&EDUCATION, "education")}</ul>
                </section>
                <section>
                    <h3>
                        <Icon icon=IconName::Award size=IconSize::Sm />
                        "Certifications"
                    </h3>
                    <ul>{credential_list(&CERTIFICATIONS, "certification")}</ul>
                </section>
            </div>
        </article>
    }
}
