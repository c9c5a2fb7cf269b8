use super::model::ScanParameters;

/// XML namespace of the HP scan settings document.
pub const SCAN_SETTINGS_NAMESPACE: &str = "http://www.hp.com/schemas/imaging/con/cnx/scan/2008/08/19";

/// Scan job description posted to the device. Everything except resolution and area is fixed:
/// 8-bit colour, raw output from the flatbed, photo content with neutral tone mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanJobRequest {
    xml: String,
}

impl ScanJobRequest {
    pub fn new(params: &ScanParameters) -> Self {
        let dpi = params.dpi;
        let width = params.width;
        let height = params.height;

        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<ScanSettings xmlns="{SCAN_SETTINGS_NAMESPACE}">
   <XResolution>{dpi}</XResolution>
   <YResolution>{dpi}</YResolution>
   <XStart>0</XStart>
   <Width>{width}</Width>
   <YStart>0</YStart>
   <Height>{height}</Height>
   <Format>Raw</Format>
   <CompressionQFactor>0</CompressionQFactor>
   <ColorSpace>Color</ColorSpace>
   <BitDepth>8</BitDepth>
   <InputSource>Platen</InputSource>
   <InputSourceType>Platen</InputSourceType>
   <GrayRendering>NTSC</GrayRendering>
   <ToneMap>
      <Gamma>0</Gamma>
      <Brightness>1000</Brightness>
      <Contrast>1000</Contrast>
      <Highlite>0</Highlite>
      <Shadow>0</Shadow>
   </ToneMap>
   <ContentType>Photo</ContentType>
</ScanSettings>"#
        );

        Self { xml }
    }

    pub fn as_xml(&self) -> &str {
        &self.xml
    }
}
