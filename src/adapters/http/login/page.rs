//! Login form markup.

use super::dto::LoginNotice;

pub(super) fn render_login_page(notice: LoginNotice) -> String {
    let banner = match notice {
        LoginNotice::None => "",
        LoginNotice::BadCredentials => r#"<p class="error">Invalid username or password.</p>"#,
        LoginNotice::LoggedOut => r#"<p class="notice">You have been logged out.</p>"#,
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Accidents - Login</title>
</head>
<body>
  <h1>Please sign in</h1>
  {banner}
  <form method="post" action="/login">
    <label for="username">Username</label>
    <input type="text" id="username" name="username" required autofocus>
    <label for="password">Password</label>
    <input type="password" id="password" name="password" required>
    <button type="submit">Sign in</button>
  </form>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_posts_to_login() {
        let html = render_login_page(LoginNotice::None);
        assert!(html.contains(r#"action="/login""#));
        assert!(html.contains(r#"name="username""#));
        assert!(html.contains(r#"name="password""#));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn banners_follow_notice() {
        assert!(render_login_page(LoginNotice::BadCredentials).contains("Invalid username"));
        assert!(render_login_page(LoginNotice::LoggedOut).contains("logged out"));
    }
}
