use super::*;

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    login: JsonResult<json::Credentials>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::JwtToken> {
    let login = login?.into_inner();
    let user = {
        let credentials = usecases::Credentials {
            email: &login.email,
            password: &login.password,
        };
        usecases::login_with_email(&db.shared()?, &credentials).map_err(|err| {
            debug!("Login with email '{}' failed: {}", login.email, err);
            err
        })?
    };
    let token = jwt_state.generate_token(user.id.as_str())?;
    Ok(Json(json::JwtToken { token }))
}

#[post("/logout", format = "application/json")]
pub fn post_logout(auth: Auth, jwt_state: &State<jwt::JwtState>) -> Json<()> {
    for bearer in auth.bearer_tokens() {
        jwt_state.blacklist_token(bearer.to_owned());
    }
    Json(())
}

#[post("/users", format = "application/json", data = "<new_user>")]
pub fn post_user(
    db: sqlite::Connections,
    notify: &State<Notify>,
    new_user: JsonResult<json::NewUser>,
) -> Result<json::User> {
    let new_user = from_json::new_user(new_user?.into_inner());
    let user = flows::register_user(&db, &*notify.0, new_user)?;
    Ok(Json(user.into()))
}

#[post("/users/verify", format = "application/json", data = "<data>")]
pub fn post_verify_email(
    db: sqlite::Connections,
    data: JsonResult<json::VerifyEmail>,
) -> Result<json::User> {
    let json::VerifyEmail { email, code } = data?.into_inner();
    let user = flows::verify_email(&db, &email, &code)?;
    Ok(Json(user.into()))
}

#[post("/users/verification-code", format = "application/json", data = "<data>")]
pub fn post_verification_code(
    db: sqlite::Connections,
    notify: &State<Notify>,
    data: JsonResult<json::RequestVerificationCode>,
) -> Result<()> {
    let email = data?.into_inner().email;
    flows::refresh_verification_code(&db, &*notify.0, &email)?;
    Ok(Json(()))
}

#[get("/users/current")]
pub fn get_current_user(db: sqlite::Connections, account: Account) -> Result<json::User> {
    let user = usecases::get_current_user(&db.shared()?, account.id())?;
    Ok(Json(user.into()))
}
