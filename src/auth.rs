use anyhow::{Result, bail};
use std::io::{self, IsTerminal};
use zeroize::Zeroizing;

pub const PASSWORD_ENV: &str = "ZUCRYPT_PASSWORD";

/// Reads the password to hash or verify.
///
/// Sources, in order: the `ZUCRYPT_PASSWORD` variable, a line on stdin when
/// stdin is piped, an interactive prompt. With `confirm` the prompt asks twice.
pub fn read_password(confirm: bool) -> Result<Zeroizing<String>> {
    //  ZUCRYPT_PASSWORD="correct horse battery" zucrypt hash --mode id
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    //  printf "%s" "$SECRET" | zucrypt verify --mode id '$argon2id$...'
    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_line(&mut buf)?;
        trim_newline(&mut buf);

        if !buf.is_empty() {
            return Ok(buf);
        }
        bail!("No password provided")
    }

    let pw = Zeroizing::new(rpassword::prompt_password("Password: ")?);
    if pw.is_empty() {
        bail!("password cannot be empty");
    }

    if confirm {
        let again = Zeroizing::new(rpassword::prompt_password("Confirm password: ")?);
        if *pw != *again {
            bail!("passwords do not match");
        }
    }

    Ok(pw)
}

fn trim_newline(s: &mut String) {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_newline_strips_line_endings_only() {
        let mut s = String::from("pass word \r\n");
        trim_newline(&mut s);
        assert_eq!(s, "pass word ");
    }
}
