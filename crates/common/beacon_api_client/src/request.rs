use beacon_query_api_types_common::{content_type::ContentType, response::DataResponse};
use serde::de::DeserializeOwned;

use crate::{
    context::RequestContext,
    error::Error,
    http_client::{ApiClient, ApiRequest, ApiResponse},
};

/// Perform a GET request and decode the `data` field of the response, returning `None` on a
/// 404 error.
pub async fn get_opt<C, T>(
    ctx: &RequestContext,
    client: &C,
    request: ApiRequest,
) -> Result<Option<T>, Error>
where
    C: ApiClient + ?Sized,
    T: DeserializeOwned,
{
    ctx.run(async move {
        match client.get(request).await? {
            Some(response) => decode_data(response).map(Some),
            None => Ok(None),
        }
    })
    .await
}

/// Perform a GET request and write the decoded `data` field into `dest`.
///
/// Returns whether the resource exists. `dest` is only written when this returns `Ok(true)`.
pub async fn simple_request<C, T>(
    ctx: &RequestContext,
    client: &C,
    request: ApiRequest,
    dest: &mut T,
) -> Result<bool, Error>
where
    C: ApiClient + ?Sized,
    T: DeserializeOwned,
{
    match get_opt(ctx, client, request).await? {
        Some(data) => {
            *dest = data;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn decode_data<T: DeserializeOwned>(response: ApiResponse) -> Result<T, Error> {
    match response.content_type {
        ContentType::Json => Ok(serde_json::from_slice::<DataResponse<T>>(&response.body)?.data),
        ContentType::Ssz => Err(Error::UnsupportedContentType(
            response.content_type.as_str().to_string(),
        )),
    }
}
