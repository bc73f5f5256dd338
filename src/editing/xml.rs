//! XML serialization of a bi-clustering.
//!
//! Document layout: the root carries the instance summary, one child
//! element per bi-cluster lists its row ids and column ids as
//! whitespace-separated text.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::editing::biclust::BiClustering;
use crate::error::Result;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn join_ids(ids: &[usize]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Writes the bi-clustering to `path`, with `instance` as a free-text
/// description of where the instance came from.
pub fn save_bi_clusters_as_xml(
    path: impl AsRef<Path>,
    result: &BiClustering,
    instance: &str,
) -> Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(
        file,
        "<bi_clusters num_bi_clusters=\"{}\" num_rows=\"{}\" num_cols=\"{}\" obj_val=\"{}\" is_opt=\"{}\" instance=\"{}\">",
        result.bi_clusters().len(),
        result.num_rows(),
        result.num_cols(),
        result.obj_val(),
        result.is_optimal(),
        escape(instance)
    )?;
    for (id, bi_cluster) in result.bi_clusters().iter().enumerate() {
        writeln!(
            file,
            "  <bi_cluster id=\"{}\" num_rows=\"{}\" num_cols=\"{}\">",
            id,
            bi_cluster.rows().len(),
            bi_cluster.cols().len()
        )?;
        writeln!(file, "    <rows>{}</rows>", join_ids(bi_cluster.rows()))?;
        writeln!(file, "    <cols>{}</cols>", join_ids(bi_cluster.cols()))?;
        writeln!(file, "  </bi_cluster>")?;
    }
    writeln!(file, "</bi_clusters>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::biclust::BiCluster;

    #[test]
    fn document_carries_summary_and_id_lists() {
        let mut result = BiClustering::new(3, 2, 1.25, false);
        result.add_bi_cluster(BiCluster::new(vec![0, 2], vec![1]));
        result.add_bi_cluster(BiCluster::new(vec![1], vec![0]));

        let path = std::env::temp_dir().join("biclust_edit_save.xml");
        save_bi_clusters_as_xml(&path, &result, "toy \"instance\"").unwrap();
        let document = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(document.contains(
            "<bi_clusters num_bi_clusters=\"2\" num_rows=\"3\" num_cols=\"2\" obj_val=\"1.25\" is_opt=\"false\" instance=\"toy &quot;instance&quot;\">"
        ));
        assert!(document.contains("<bi_cluster id=\"0\" num_rows=\"2\" num_cols=\"1\">"));
        assert!(document.contains("<rows>0 2</rows>"));
        assert!(document.contains("<cols>1</cols>"));
        assert!(document.ends_with("</bi_clusters>\n"));
    }
}
