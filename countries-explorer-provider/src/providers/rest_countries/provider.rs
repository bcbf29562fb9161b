//! REST Countries CountryProvider trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::CountryProvider;
use crate::types::Country;

use super::RestCountriesProvider;
use super::http::{interpret_all_response, interpret_name_response, into_countries, merge_details};

#[async_trait]
impl CountryProvider for RestCountriesProvider {
    fn id(&self) -> &'static str {
        super::PROVIDER_NAME
    }

    /// 主投影与详情投影两次请求合并为一次获取，任一失败则整体失败
    async fn fetch_all(&self) -> Result<Vec<Country>> {
        let (status, body) = self.get("/all", &Self::fields_query(&self.all_fields)).await?;
        let mut records = interpret_all_response(status, &body)?;

        if self.needs_detail_fetch() {
            let (status, body) = self
                .get("/all", &Self::fields_query(&self.detail_fields))
                .await?;
            let details = interpret_all_response(status, &body)?;
            log::debug!("[{}] merging {} detail records", self.id(), details.len());
            merge_details(&mut records, details);
        }

        let countries = into_countries(records)?;
        log::info!("[{}] fetched {} countries", self.id(), countries.len());
        Ok(countries)
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Option<Country>> {
        let (status, body) = self.get(&Self::name_path(name), &[]).await?;
        let country = interpret_name_response(status, &body)?;
        if country.is_none() {
            log::info!("[{}] no country matches '{name}'", self.id());
        }
        Ok(country)
    }
}
