//! Login Page
//!
//! Static sign-in form. Submitting it does nothing.

use leptos::prelude::*;

#[component]
pub fn Login() -> impl IntoView {
    view! {
        <div class="login">
            <form action="#" on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
                <h2>"Welcome"</h2>
                <div class="input">
                    <input type="text" required />
                    <label>"Username"</label>
                </div>
                <div class="input">
                    <input type="password" required />
                    <label>"Password"</label>
                </div>
                <div class="forgotten">
                    <label for="remember">
                        <input type="checkbox" id="remember" />
                        <p>"Remember Me"</p>
                    </label>
                </div>
            </form>
        </div>
    }
}
